/// Plain-text extraction.
use crate::error::AnalysisError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode `bytes` as strict UTF-8, dropping a leading byte-order mark.
pub fn extract_txt(bytes: &[u8]) -> Result<String, AnalysisError> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    Ok(String::from_utf8(body.to_vec())?)
}
