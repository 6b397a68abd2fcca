/// Error taxonomy for the analysis pipeline.
///
/// Every failure is terminal for the document being analysed: no partial
/// report is produced and nothing is retried (malformed input does not
/// become valid on retry). Each variant maps to the pipeline [`Stage`] it
/// came from so callers can tell the user which step failed.
use crate::loader::DocumentFormat;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, analysing, or exporting a document.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The declared or detected format is not PDF, DOCX or TXT.
    #[error("unsupported document format: {0:?}")]
    UnsupportedFormat(String),

    /// The PDF has pages but no extractable text (typically a scanned image).
    #[error("PDF has no extractable text layer (is it a scanned image?)")]
    NoTextLayer,

    /// A plain-text document is not valid UTF-8.
    #[error("text is not valid UTF-8: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    /// A top-N request asked for zero entries.
    #[error("top-N count must be greater than zero")]
    InvalidN,

    /// The report builder was asked to build before every part was set.
    #[error("analysis incomplete: {0} was not computed")]
    IncompleteAnalysis(&'static str),

    /// The PDF/DOCX container could not be parsed at all.
    #[error("could not parse {format} document: {message}")]
    Malformed {
        format: DocumentFormat,
        message: String,
    },

    /// Reading the document from disk failed.
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration or dictionary is invalid.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Writing or parsing CSV failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// Writing or parsing JSON failed.
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// The pipeline step an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Read,
    Extract,
    Analyse,
    Assemble,
    Export,
    Configure,
}

impl Stage {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Extract => "text extraction",
            Self::Analyse => "analysis",
            Self::Assemble => "report assembly",
            Self::Export => "export",
            Self::Configure => "configuration",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl AnalysisError {
    /// Which pipeline step produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Io { .. } => Stage::Read,
            Self::UnsupportedFormat(_)
            | Self::NoTextLayer
            | Self::EncodingError(_)
            | Self::Malformed { .. } => Stage::Extract,
            Self::InvalidN => Stage::Analyse,
            Self::IncompleteAnalysis(_) => Stage::Assemble,
            Self::Csv(_) | Self::Json(_) => Stage::Export,
            Self::Config(_) => Stage::Configure,
        }
    }
}

/// A per-document failure as surfaced to the user: which file, which step, why.
#[derive(Debug, Clone)]
pub struct DocumentFailure {
    pub path: PathBuf,
    pub stage: Stage,
    pub message: String,
}

impl DocumentFailure {
    pub fn new(path: impl Into<PathBuf>, err: &AnalysisError) -> Self {
        Self {
            path: path.into(),
            stage: err.stage(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for DocumentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} failed: {}",
            self.path.display(),
            self.stage,
            self.message
        )
    }
}
