//! Text Extractor: turns an uploaded PDF into one plain-text string.
//!
//! Pages are read in document order and concatenated with no separator;
//! the joined result is trimmed. No layout or structural parsing happens here.

use std::panic::{self, AssertUnwindSafe};

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

/// PDF files must declare their header within the first KiB.
const HEADER_SEARCH_WINDOW: usize = 1024;
const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("the file is not a PDF document")]
    NotPdf,

    #[error("the PDF could not be read: {0}")]
    Malformed(String),
}

/// Extracts the text of every page of `document`, off the async runtime.
///
/// The parser is CPU-bound and is known to panic on some broken inputs, so it
/// runs on the blocking pool and panics are reported as `Malformed`.
pub async fn extract_text(document: Bytes) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || extract_text_blocking(&document))
        .await
        .map_err(|e| ExtractError::Malformed(format!("extraction task failed: {e}")))?
}

/// Synchronous form of [`extract_text`].
pub fn extract_text_blocking(document: &[u8]) -> Result<String, ExtractError> {
    if !has_pdf_header(document) {
        return Err(ExtractError::NotPdf);
    }

    let pages = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(document)
    }))
    .map_err(|payload| ExtractError::Malformed(panic_message(payload.as_ref())))?
    .map_err(|e| ExtractError::Malformed(e.to_string()))?;

    debug!("Extracted text from {} page(s)", pages.len());
    Ok(join_pages(pages))
}

/// Concatenates page texts in order and strips surrounding whitespace.
/// Zero pages, or pages with no text, yield an empty string.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for page in pages {
        text.push_str(page.as_ref());
    }
    text.trim().to_string()
}

fn has_pdf_header(document: &[u8]) -> bool {
    let window = &document[..document.len().min(HEADER_SEARCH_WINDOW)];
    window.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("parser aborted: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("parser aborted: {s}")
    } else {
        "parser aborted on an unreadable document".to_string()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Builds a PDF with one page per entry, each page showing its string
    /// (or nothing, for an empty entry) in Courier.
    pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
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
        for text in pages {
            let operations = if text.is_empty() {
                vec![]
            } else {
                vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ]
            };
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().expect("encode page content"),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).expect("serialize fixture pdf");
        buf
    }
}
