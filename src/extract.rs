// PDF text extraction with fallbacks.
//
// Backends are tried in a fixed preference order; the first one that
// produces non-blank text wins. A backend failing internally is treated as
// "cannot produce text" and control passes to the next one, so a document
// that confuses one parser still gets a chance with the others.
use lopdf::content::Content;
use lopdf::{Document, Object};
use std::panic::{self, AssertUnwindSafe};

/// Every extraction backend failed or produced blank text.
#[derive(Debug, thiserror::Error)]
#[error(
    "could not read text from the PDF; if the document is a scanned image, \
     it has no text layer and needs OCR, which this tool does not provide"
)]
pub struct ExtractionError;

pub type Backend = fn(&[u8]) -> Option<String>;

/// Best text-layer reconstruction. `pdf-extract` is known to panic on some
/// exotic font encodings, so the call is isolated with `catch_unwind`.
fn backend_pdf_extract(data: &[u8]) -> Option<String> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(data)
    }));
    match result {
        Ok(Ok(text)) => Some(text),
        _ => None,
    }
}

/// lopdf's built-in per-page text extraction, joined over all pages.
fn backend_lopdf_text(data: &[u8]) -> Option<String> {
    let doc = Document::load_mem(data).ok()?;
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    if pages.is_empty() {
        return None;
    }
    let mut parts = Vec::with_capacity(pages.len());
    for page in pages {
        // One undecodable page should not sink the rest.
        if let Ok(t) = doc.extract_text(&[page]) {
            parts.push(t);
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}

/// Simplest fallback: walk the decoded content streams and collect the
/// string operands of `Tj`/`TJ` show-text operators verbatim. No font
/// decoding, which is enough for the plain ASCII rows we scan for.
fn backend_lopdf_raw(data: &[u8]) -> Option<String> {
    let doc = Document::load_mem(data).ok()?;
    let mut out = String::new();
    for (_, page_id) in doc.get_pages() {
        let Ok(content_bytes) = doc.get_page_content(page_id) else {
            continue;
        };
        let Ok(content) = Content::decode(&content_bytes) else {
            continue;
        };
        for op in &content.operations {
            match op.operator.as_str() {
                "Tj" | "'" | "\"" => {
                    for operand in &op.operands {
                        if let Object::String(bytes, _) = operand {
                            out.push_str(&String::from_utf8_lossy(bytes));
                            out.push(' ');
                        }
                    }
                }
                "TJ" => {
                    for operand in &op.operands {
                        if let Object::Array(items) = operand {
                            for item in items {
                                if let Object::String(bytes, _) = item {
                                    out.push_str(&String::from_utf8_lossy(bytes));
                                }
                            }
                        }
                    }
                    out.push(' ');
                }
                // Text-positioning operators end a logical line often enough
                // to serve as row separators for the pattern scan.
                "Td" | "TD" | "T*" | "ET" => out.push('\n'),
                _ => {}
            }
        }
        out.push('\n');
    }
    Some(out)
}

const BACKENDS: &[Backend] = &[backend_pdf_extract, backend_lopdf_text, backend_lopdf_raw];

/// Run the backend chain: first non-blank result wins.
///
/// Separated from [`extract_text`] so the chain policy can be exercised with
/// substitute backends.
pub fn extract_with(backends: &[Backend], data: &[u8]) -> Result<String, ExtractionError> {
    for backend in backends {
        if let Some(text) = backend(data) {
            if !text.trim().is_empty() {
                return Ok(text);
            }
        }
    }
    Err(ExtractionError)
}

/// Extract the full concatenated text of a PDF given as raw bytes.
pub fn extract_text(data: &[u8]) -> Result<String, ExtractionError> {
    extract_with(BACKENDS, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none_backend(_: &[u8]) -> Option<String> {
        None
    }

    fn blank_backend(_: &[u8]) -> Option<String> {
        Some("   \n\t".to_string())
    }

    fn text_backend(_: &[u8]) -> Option<String> {
        Some("AB12C 07.10.2025 21:46".to_string())
    }

    #[test]
    fn first_non_blank_backend_wins() {
        let chain: &[Backend] = &[none_backend, blank_backend, text_backend];
        let text = extract_with(chain, b"irrelevant").unwrap();
        assert_eq!(text, "AB12C 07.10.2025 21:46");
    }

    #[test]
    fn blank_text_does_not_count_as_success() {
        let chain: &[Backend] = &[blank_backend];
        assert!(extract_with(chain, b"irrelevant").is_err());
    }

    #[test]
    fn all_backends_failing_is_an_error() {
        let chain: &[Backend] = &[none_backend, none_backend];
        assert!(extract_with(chain, b"irrelevant").is_err());
    }

    #[test]
    fn garbage_bytes_fail_with_guidance() {
        let err = extract_text(b"this is not a pdf").unwrap_err();
        assert!(err.to_string().contains("OCR"));
    }
}
