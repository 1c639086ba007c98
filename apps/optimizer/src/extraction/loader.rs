//! Document loader — turns an uploaded PDF or word-processor file into plain text.

use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use tracing::debug;

use crate::errors::ExtractionError;

/// Extensions accepted at the upload boundary, lowercase and without the dot.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Lowercased extension of `path`, or empty if it has none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default()
}

/// Reads the whole document as one string, pages or paragraphs in document order.
/// Line endings are normalized to `\n`.
pub fn load_document(path: &Path) -> Result<String, ExtractionError> {
    let ext = extension_of(path);
    let text = match ext.as_str() {
        "pdf" => extract_text_from_pdf(&read_bytes(path)?)?,
        // Legacy binary .doc files are not OOXML and fail to decode here.
        "docx" | "doc" => extract_text_from_docx(&read_bytes(path)?)?,
        _ => return Err(ExtractionError::UnsupportedFormat(ext)),
    };

    debug!(
        "Loaded {} ({} chars of text)",
        path.display(),
        text.chars().count()
    );
    Ok(text.replace("\r\n", "\n"))
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, ExtractionError> {
    std::fs::read(path).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn extract_text_from_pdf(data: &[u8]) -> Result<String, ExtractionError> {
    pdf_extract::extract_text_from_mem(data).map_err(|e| ExtractionError::Pdf(e.to_string()))
}

/// Run texts are concatenated per paragraph; paragraphs are joined with newlines
/// so empty paragraphs become the blank lines that delimit sections.
fn extract_text_from_docx(data: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(data).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut paragraphs = Vec::new();
    for child in &docx.document.children {
        if let DocumentChild::Paragraph(p) = child {
            let mut line = String::new();
            for p_child in &p.children {
                if let ParagraphChild::Run(run) = p_child {
                    for run_child in &run.children {
                        if let RunChild::Text(t) = run_child {
                            line.push_str(&t.text);
                        }
                    }
                }
            }
            paragraphs.push(line);
        }
    }
    Ok(paragraphs.join("\n"))
}
