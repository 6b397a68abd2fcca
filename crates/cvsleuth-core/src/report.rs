/// The assembled analysis result for one document.
///
/// An [`AnalysisReport`] is immutable once built. It is the only thing the
/// viewer and the exporters consume; nothing downstream sees tokens or
/// extracted text.
use crate::analysis::{total_mentions, CategoryResult, WordCount, YearCount};
use crate::error::AnalysisError;
use crate::loader::DocumentFormat;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Headline numbers for a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Tokens that survived normalisation (equals the frequency table sum).
    pub total_words: u64,
    /// Distinct surviving tokens.
    pub unique_words: u64,
    /// Length of the extracted text in characters.
    pub raw_text_length: u64,
    /// Year mentions within range, every occurrence counted.
    pub years_mentioned: u64,
}

impl ReportSummary {
    pub fn new(total_words: u64, unique_words: u64, raw_text_length: u64, years: &YearCount) -> Self {
        Self {
            total_words,
            unique_words,
            raw_text_length,
            years_mentioned: total_mentions(years),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Document name as supplied by the caller.
    pub source: String,
    pub format: DocumentFormat,
    pub summary: ReportSummary,
    /// Most frequent words, highest first.
    pub top_words: Vec<WordCount>,
    /// The wider ranking the word cloud is drawn from.
    #[serde(default)]
    pub cloud_words: Vec<WordCount>,
    /// Keyword hits per category, dense, in dictionary order.
    pub categories: CategoryResult,
    /// Year → mentions, sparse.
    pub years: YearCount,
    pub analysed_at: DateTime<Utc>,
}

impl AnalysisReport {
    /// Total keyword hits across all categories.
    pub fn keyword_hits(&self) -> u64 {
        self.categories.iter().map(|c| c.total()).sum()
    }

    /// Earliest and latest mentioned years, if any.
    pub fn year_span(&self) -> Option<(u16, u16)> {
        let first = *self.years.keys().next()?;
        let last = *self.years.keys().next_back()?;
        Some((first, last))
    }

    /// Document name without its extension, for export file names.
    pub fn stem(&self) -> &str {
        match self.source.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => &self.source,
        }
    }
}

/// Collects the parts of a report; `build` refuses to produce a partial one.
#[derive(Debug)]
pub struct ReportBuilder {
    source: String,
    format: DocumentFormat,
    top_words: Option<Vec<WordCount>>,
    cloud_words: Vec<WordCount>,
    categories: Option<CategoryResult>,
    years: Option<YearCount>,
    summary: Option<ReportSummary>,
}

impl ReportBuilder {
    pub fn new(source: impl Into<String>, format: DocumentFormat) -> Self {
        Self {
            source: source.into(),
            format,
            top_words: None,
            cloud_words: Vec::new(),
            categories: None,
            years: None,
            summary: None,
        }
    }

    pub fn top_words(mut self, top_words: Vec<WordCount>) -> Self {
        self.top_words = Some(top_words);
        self
    }

    /// Optional; a report without it has an empty cloud ranking.
    pub fn cloud_words(mut self, cloud_words: Vec<WordCount>) -> Self {
        self.cloud_words = cloud_words;
        self
    }

    pub fn categories(mut self, categories: CategoryResult) -> Self {
        self.categories = Some(categories);
        self
    }

    pub fn years(mut self, years: YearCount) -> Self {
        self.years = Some(years);
        self
    }

    pub fn summary(mut self, summary: ReportSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Fails with [`AnalysisError::IncompleteAnalysis`] naming the first unset part.
    pub fn build(self) -> Result<AnalysisReport, AnalysisError> {
        Ok(AnalysisReport {
            source: self.source,
            format: self.format,
            top_words: self
                .top_words
                .ok_or(AnalysisError::IncompleteAnalysis("top words"))?,
            cloud_words: self.cloud_words,
            categories: self
                .categories
                .ok_or(AnalysisError::IncompleteAnalysis("keyword categories"))?,
            years: self
                .years
                .ok_or(AnalysisError::IncompleteAnalysis("year timeline"))?,
            summary: self
                .summary
                .ok_or(AnalysisError::IncompleteAnalysis("summary"))?,
            analysed_at: Utc::now(),
        })
    }
}

/// Combine independently computed parts into a report.
///
/// Any `None` part fails with [`AnalysisError::IncompleteAnalysis`].
pub fn assemble(
    source: impl Into<String>,
    format: DocumentFormat,
    top_words: Option<Vec<WordCount>>,
    categories: Option<CategoryResult>,
    years: Option<YearCount>,
    summary: Option<ReportSummary>,
) -> Result<AnalysisReport, AnalysisError> {
    let mut builder = ReportBuilder::new(source, format);
    if let Some(top_words) = top_words {
        builder = builder.top_words(top_words);
    }
    if let Some(categories) = categories {
        builder = builder.categories(categories);
    }
    if let Some(years) = years {
        builder = builder.years(years);
    }
    if let Some(summary) = summary {
        builder = builder.summary(summary);
    }
    builder.build()
}
