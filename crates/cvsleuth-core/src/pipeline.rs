/// One synchronous analysis run per document.
///
/// Loader → Normalizer → { frequency, keywords, timeline } → ReportBuilder.
///
/// An [`Analyzer`] holds only read-only state (configuration, normaliser,
/// shared dictionary), so one instance can serve any number of threads.
use crate::analysis::{
    categorize, count_words, extract_years, top_words_from_table, TextNormalizer,
};
use crate::config::AnalysisConfig;
use crate::dictionary::CategoryDictionary;
use crate::error::AnalysisError;
use crate::loader::{self, RawDocument};
use crate::report::{AnalysisReport, ReportBuilder, ReportSummary};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, info_span};

#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalysisConfig,
    normalizer: TextNormalizer,
    dictionary: Arc<CategoryDictionary>,
}

impl Analyzer {
    /// Validate `config` and build an analyser around `dictionary`.
    pub fn new(
        config: AnalysisConfig,
        dictionary: Arc<CategoryDictionary>,
    ) -> Result<Self, AnalysisError> {
        config.validate()?;
        Ok(Self {
            normalizer: TextNormalizer::new(config.normalizer_config()),
            config,
            dictionary,
        })
    }

    /// Build an analyser using the dictionary `config` selects.
    pub fn from_config(config: AnalysisConfig) -> Result<Self, AnalysisError> {
        let dictionary = config.resolve_dictionary()?;
        Self::new(config, dictionary)
    }

    /// Default configuration and the built-in dictionary.
    pub fn with_defaults() -> Self {
        let config = AnalysisConfig::default();
        Self {
            normalizer: TextNormalizer::new(config.normalizer_config()),
            config,
            dictionary: CategoryDictionary::builtin(),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &CategoryDictionary {
        &self.dictionary
    }

    /// Read a document from disk and analyse it.
    pub fn analyze_path(&self, path: &Path) -> Result<AnalysisReport, AnalysisError> {
        let document = loader::load_path(path)?;
        self.analyze_document(&document)
    }

    /// Run the full pipeline over an in-memory document.
    pub fn analyze_document(&self, document: &RawDocument) -> Result<AnalysisReport, AnalysisError> {
        let _span = info_span!("analyze", source = %document.name, format = %document.format)
            .entered();
        let start = Instant::now();

        let text = loader::extract(&document.bytes, document.format)?;
        let report = self.analyze_text(&document.name, document.format, &text)?;

        info!(
            "Analysed {} in {:.1?}: {} words, {} unique, {} year mentions",
            document.name,
            start.elapsed(),
            report.summary.total_words,
            report.summary.unique_words,
            report.summary.years_mentioned,
        );
        Ok(report)
    }

    /// Analyse already-extracted text.
    pub fn analyze_text(
        &self,
        source: &str,
        format: loader::DocumentFormat,
        text: &str,
    ) -> Result<AnalysisReport, AnalysisError> {
        let normalized = self.normalizer.normalize(text);
        debug!(
            "Normalised: {} tokens ({} before filtering)",
            normalized.tokens.len(),
            normalized.all_tokens.len()
        );

        let table = count_words(&normalized.tokens);
        let top_words = top_words_from_table(&table, self.config.top_n)?;
        let cloud_words = top_words_from_table(&table, self.config.cloud_words)?;

        let categories = categorize(&normalized.all_tokens, &normalized.folded, &self.dictionary);
        debug!(
            "Keywords: {} hits across {} categories",
            categories.iter().map(|c| c.total()).sum::<u64>(),
            categories.len()
        );

        let years = extract_years(text, self.config.min_year, self.config.max_year);
        debug!("Timeline: {} distinct years", years.len());

        let summary = ReportSummary::new(
            normalized.tokens.len() as u64,
            table.len() as u64,
            text.chars().count() as u64,
            &years,
        );

        ReportBuilder::new(source, format)
            .top_words(top_words)
            .cloud_words(cloud_words)
            .categories(categories)
            .years(years)
            .summary(summary)
            .build()
    }
}
