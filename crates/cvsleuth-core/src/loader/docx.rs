/// DOCX extraction via `docx-rs`.
///
/// A .docx file is a ZIP of XML parts; `docx-rs` parses it into a typed
/// tree. Text lives at Document → Paragraph → Run → Text, or one level
/// deeper when the run sits inside a hyperlink. Runs inside a paragraph are
/// concatenated; paragraphs are joined with newlines.
use crate::error::AnalysisError;
use crate::loader::DocumentFormat;
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

/// Extract the text of every body paragraph, in document order.
pub fn extract_docx(bytes: &[u8]) -> Result<String, AnalysisError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| AnalysisError::Malformed {
        format: DocumentFormat::Docx,
        message: e.to_string(),
    })?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut out = String::new();
    push_runs(&para.children, &mut out);
    out
}

fn push_runs(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    if let RunChild::Text(t) = rc {
                        out.push_str(&t.text);
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_runs(&link.children, out),
            _ => {}
        }
    }
}
