/// Document loader: turns raw document bytes into plain text.
///
/// Three formats are supported, each in its own module:
/// - **PDF** ([`pdf`]): per-page text via `lopdf`, with `pdf-extract` as a
///   fallback parser.
/// - **DOCX** ([`docx`]): paragraph text via `docx-rs`.
/// - **TXT** ([`text`]): strict UTF-8 decoding.
///
/// The loader is a pure transformation. [`load_path`] is the only function
/// that touches the filesystem, and it releases the file before returning.
pub mod docx;
pub mod pdf;
pub mod text;

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Declared format of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

impl DocumentFormat {
    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Txt => "TXT",
        }
    }

    /// Map a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Result<Self, AnalysisError> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "txt" | "text" => Ok(Self::Txt),
            other => Err(AnalysisError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Detect the format of a path from its extension.
    pub fn from_path(path: &Path) -> Result<Self, AnalysisError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(ext)
    }

    /// Guess the format from magic bytes, for callers without a file name.
    ///
    /// `%PDF-` is a PDF and a ZIP local-file header is taken to be DOCX.
    /// Anything else is treated as plain text and left to UTF-8 validation.
    pub fn sniff(bytes: &[u8]) -> Self {
        if bytes.starts_with(b"%PDF-") {
            Self::Pdf
        } else if bytes.starts_with(b"PK\x03\x04") {
            Self::Docx
        } else {
            Self::Txt
        }
    }

    /// Whether `path` has an extension this loader understands.
    pub fn is_supported_path(path: &Path) -> bool {
        Self::from_path(path).is_ok()
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An uploaded document: its name, raw bytes, and declared format.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// File name or other identifier, kept for reporting.
    pub name: String,
    pub bytes: Vec<u8>,
    pub format: DocumentFormat,
}

impl RawDocument {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>, format: DocumentFormat) -> Self {
        Self {
            name: name.into(),
            bytes,
            format,
        }
    }
}

/// Extract plain text from document bytes of the given format.
pub fn extract(bytes: &[u8], format: DocumentFormat) -> Result<String, AnalysisError> {
    let text = match format {
        DocumentFormat::Pdf => pdf::extract_pdf(bytes)?,
        DocumentFormat::Docx => docx::extract_docx(bytes)?,
        DocumentFormat::Txt => text::extract_txt(bytes)?,
    };
    debug!(
        "Extracted {} chars from {} bytes of {}",
        text.len(),
        bytes.len(),
        format
    );
    Ok(text)
}

/// Read a document from disk, detecting its format from the extension.
///
/// A file with no extension at all is sniffed from its first bytes; an
/// unknown extension is still an error.
pub fn load_path(path: &Path) -> Result<RawDocument, AnalysisError> {
    let declared = match path.extension() {
        Some(_) => Some(DocumentFormat::from_path(path)?),
        None => None,
    };
    let bytes = std::fs::read(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = declared.unwrap_or_else(|| DocumentFormat::sniff(&bytes));
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();
    Ok(RawDocument::new(name, bytes, format))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn extension_detection_is_case_insensitive() {
        assert_eq!(DocumentFormat::from_extension("PDF").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_extension("Docx").unwrap(), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::from_extension("txt").unwrap(), DocumentFormat::Txt);
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        for ext in &["odt", "doc", "rtf", ""] {
            assert!(
                matches!(
                    DocumentFormat::from_extension(ext),
                    Err(AnalysisError::UnsupportedFormat(_))
                ),
                "expected UnsupportedFormat for .{ext}"
            );
        }
    }

    #[test]
    fn path_without_extension_is_unsupported() {
        let path = PathBuf::from("resume");
        assert!(!DocumentFormat::is_supported_path(&path));
    }

    #[test]
    fn sniff_recognises_magic_bytes() {
        assert_eq!(DocumentFormat::sniff(b"%PDF-1.5\n..."), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::sniff(b"PK\x03\x04rest"), DocumentFormat::Docx);
        assert_eq!(DocumentFormat::sniff(b"Jane Doe"), DocumentFormat::Txt);
    }

    #[test]
    fn extensionless_files_are_sniffed() {
        let dir = tempfile::tempdir().unwrap();
        let resume = dir.path().join("resume");
        std::fs::write(&resume, "Jane Doe\nRust developer").unwrap();
        let scan = dir.path().join("scan");
        std::fs::write(&scan, b"%PDF-1.4\n%\xe2\xe3").unwrap();

        let doc = load_path(&resume).unwrap();
        assert_eq!(doc.format, DocumentFormat::Txt);
        assert_eq!(doc.name, "resume");
        assert_eq!(load_path(&scan).unwrap().format, DocumentFormat::Pdf);
    }

    #[test]
    fn unknown_extension_is_rejected_before_reading() {
        let err = load_path(Path::new("/definitely/not/here.odt")).unwrap_err();
        assert!(matches!(err, AnalysisError::UnsupportedFormat(_)));
    }

    #[test]
    fn load_missing_file_reports_read_error() {
        let err = load_path(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }));
    }
}
