/// Analysis stages: run after text extraction, in this order:
///
/// normalizer → { frequency, keywords, timeline }
///
/// The normalizer produces every view the later stages need from a single
/// pass over the extracted text.

pub mod frequency;
pub mod keywords;
pub mod normalizer;
pub mod stopwords;
pub mod timeline;

pub use frequency::{count_words, top_words, top_words_from_table, FrequencyTable, WordCount};
pub use keywords::{categorize, CategoryHits, CategoryResult, KeywordCount};
pub use normalizer::{NormalizedText, NormalizerConfig, TextNormalizer, Token};
pub use timeline::{extract_years, total_mentions, YearCount};
