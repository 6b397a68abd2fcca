/// CvSleuth Core: document extraction, text analysis, and export.
///
/// This crate contains all business logic with zero UI dependencies.
/// It is designed to be reusable across different frontends (GUI, CLI, web).
///
/// # Modules
///
/// - [`loader`]: Text extraction from PDF, DOCX and plain-text documents.
/// - [`analysis`]: Normalisation, word frequencies, keyword categories, year timeline.
/// - [`report`]: The assembled [`report::AnalysisReport`] and its builder.
/// - [`pipeline`]: [`pipeline::Analyzer`], one synchronous run per document.
/// - [`worker`]: Background batch analysis with progress reporting.
/// - [`dictionary`]: Keyword category dictionaries (built-in and JSON).
/// - [`config`]: Analysis configuration loaded from JSON.
/// - [`export`]: CSV and JSON serialisation of reports.
/// - [`cloud`]: Deterministic word-cloud layout.
/// - [`format`]: Human-readable counts and sizes.
pub mod analysis;
pub mod cloud;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod export;
pub mod format;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod worker;

pub use config::AnalysisConfig;
pub use error::{AnalysisError, Stage};
pub use loader::{DocumentFormat, RawDocument};
pub use pipeline::Analyzer;
pub use report::AnalysisReport;
