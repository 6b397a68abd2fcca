/// PDF extraction.
///
/// Two tiers, mirroring how a desktop PDF reader degrades:
/// - **Tier 1 (`lopdf`):** page-by-page text in page order, joined with
///   newlines.
/// - **Tier 2 (`pdf-extract`):** whole-document extraction, used when
///   Tier 1 errors or finds no text (its font decoding covers cases
///   `lopdf` does not).
///
/// A document with zero pages is valid and empty. A document with pages
/// but no text from either tier has no text layer (scanned image) and is
/// reported as [`AnalysisError::NoTextLayer`] so the caller can tell
/// "nothing to extract" apart from "extraction impossible".
use crate::error::AnalysisError;
use crate::loader::DocumentFormat;
use lopdf::Document;
use tracing::{debug, warn};

/// Extract text from PDF bytes.
pub fn extract_pdf(bytes: &[u8]) -> Result<String, AnalysisError> {
    let doc = Document::load_mem(bytes).map_err(|e| AnalysisError::Malformed {
        format: DocumentFormat::Pdf,
        message: e.to_string(),
    })?;

    let pages = doc.get_pages();
    if pages.is_empty() {
        debug!("PDF has no pages");
        return Ok(String::new());
    }

    match extract_pages(&doc) {
        Ok(text) if has_text(&text) => return Ok(text),
        Ok(_) => debug!("lopdf found no text in {} pages, trying pdf-extract", pages.len()),
        Err(e) => warn!("lopdf text extraction failed ({e}), trying pdf-extract"),
    }

    match extract_fallback(bytes) {
        Some(text) if has_text(&text) => Ok(text),
        _ => Err(AnalysisError::NoTextLayer),
    }
}

fn extract_pages(doc: &Document) -> Result<String, lopdf::Error> {
    let mut pages = Vec::new();
    // get_pages() is a BTreeMap keyed by page number, so this is page order.
    for page_number in doc.get_pages().keys() {
        let text = doc.extract_text(&[*page_number])?;
        pages.push(text.trim_end().to_string());
    }
    Ok(pages.join("\n"))
}

fn extract_fallback(bytes: &[u8]) -> Option<String> {
    // pdf-extract panics on some malformed font programs.
    let result = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));
    match result {
        Ok(Ok(text)) => Some(text),
        Ok(Err(e)) => {
            warn!("pdf-extract failed: {e}");
            None
        }
        Err(_) => {
            warn!("pdf-extract panicked");
            None
        }
    }
}

fn has_text(text: &str) -> bool {
    text.chars().any(|c| !c.is_whitespace())
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! In-memory PDF builders for tests.
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Build a PDF with one page per entry. `Some(text)` draws the text;
    /// `None` draws only a filled rectangle (an image-like page with no text).
    pub fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page in pages {
            let operations = match page {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![
                    Operation::new("re", vec![72.into(), 72.into(), 400.into(), 600.into()]),
                    Operation::new("f", vec![]),
                ],
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut out = Vec::new();
        doc.save_to(&mut out).unwrap();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::build_pdf;
    use super::*;

    #[test]
    fn extracts_text_in_page_order() {
        let bytes = build_pdf(&[Some("Python engineer"), Some("Graduated 2015")]);
        let text = extract_pdf(&bytes).unwrap();
        let first = text.find("Python").expect("page 1 text missing");
        let second = text.find("2015").expect("page 2 text missing");
        assert!(first < second, "pages out of order: {text:?}");
        assert!(text.contains('\n'), "pages must be newline separated");
    }

    #[test]
    fn zero_page_pdf_is_empty_text() {
        let bytes = build_pdf(&[]);
        assert_eq!(extract_pdf(&bytes).unwrap(), "");
    }

    #[test]
    fn pdf_without_text_has_no_text_layer() {
        let bytes = build_pdf(&[None, None]);
        let err = extract_pdf(&bytes).unwrap_err();
        assert!(matches!(err, AnalysisError::NoTextLayer), "got {err:?}");
    }

    #[test]
    fn garbage_is_malformed() {
        let err = extract_pdf(b"%PDF-1.4 truncated").unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Malformed {
                format: DocumentFormat::Pdf,
                ..
            }
        ));
    }
}
