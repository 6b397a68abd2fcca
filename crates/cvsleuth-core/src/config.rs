/// Analysis configuration.
///
/// Loaded from an optional JSON file; every field is optional and falls
/// back to its default. Validation happens once, before any document is
/// analysed, so a bad setting is reported as a configuration error rather
/// than as a failure of every document in a batch.
use crate::analysis::NormalizerConfig;
use crate::dictionary::{Category, CategoryDictionary};
use crate::error::AnalysisError;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Default number of top words reported.
pub const DEFAULT_TOP_N: usize = 20;

/// Default number of words placed in the word cloud.
pub const DEFAULT_CLOUD_WORDS: usize = 300;

/// Earliest year counted as a mention by default.
pub const DEFAULT_MIN_YEAR: u16 = 1950;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// How many words the frequency ranking keeps.
    pub top_n: usize,
    /// How many words the word cloud draws from.
    pub cloud_words: usize,
    /// Tokens shorter than this many characters are dropped.
    pub min_token_len: usize,
    pub min_year: u16,
    pub max_year: u16,
    /// Stopwords added to the built-in lists.
    pub extra_stopwords: Vec<String>,
    /// Replaces the built-in keyword dictionary when present.
    pub dictionary: Option<Vec<Category>>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            cloud_words: DEFAULT_CLOUD_WORDS,
            min_token_len: 2,
            min_year: DEFAULT_MIN_YEAR,
            max_year: default_max_year(),
            extra_stopwords: Vec::new(),
            dictionary: None,
        }
    }
}

/// The calendar year after the current one.
fn default_max_year() -> u16 {
    let next = chrono::Local::now().year() + 1;
    u16::try_from(next).unwrap_or(9999).min(9999)
}

impl AnalysisConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, AnalysisError> {
        let json = std::fs::read_to_string(path).map_err(|source| AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AnalysisError::Config(format!("config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.top_n == 0 {
            return Err(AnalysisError::Config("top_n must be at least 1".into()));
        }
        if self.cloud_words == 0 {
            return Err(AnalysisError::Config(
                "cloud_words must be at least 1".into(),
            ));
        }
        if self.min_token_len == 0 {
            return Err(AnalysisError::Config(
                "min_token_len must be at least 1".into(),
            ));
        }
        for year in [self.min_year, self.max_year] {
            if !(1000..=9999).contains(&year) {
                return Err(AnalysisError::Config(format!(
                    "year bound {year} is not a four-digit year"
                )));
            }
        }
        if self.min_year > self.max_year {
            return Err(AnalysisError::Config(format!(
                "min_year {} is after max_year {}",
                self.min_year, self.max_year
            )));
        }
        if let Some(categories) = &self.dictionary {
            CategoryDictionary::new(categories.clone())?;
        }
        Ok(())
    }

    /// The dictionary this config selects: the custom one, or the built-in.
    pub fn resolve_dictionary(&self) -> Result<Arc<CategoryDictionary>, AnalysisError> {
        match &self.dictionary {
            Some(categories) => Ok(Arc::new(CategoryDictionary::new(categories.clone())?)),
            None => Ok(CategoryDictionary::builtin()),
        }
    }

    pub fn normalizer_config(&self) -> NormalizerConfig {
        NormalizerConfig {
            min_token_len: self.min_token_len,
            extra_stopwords: self.extra_stopwords.clone(),
        }
    }
}
