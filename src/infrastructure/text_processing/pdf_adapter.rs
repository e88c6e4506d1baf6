use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;
use tempfile::NamedTempFile;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::text_sanitizer::sanitize_extracted_text;

const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Extracts the text layer of a PDF. Scanned pages without a text layer
/// contribute nothing; a document made only of those yields `NoTextFound`.
pub struct PdfAdapter {
    timeout: Duration,
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn extraction_failed(context: &str, err: impl std::fmt::Display) -> FileLoaderError {
    FileLoaderError::ExtractionFailed(format!("{context}: {err}"))
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_EXTRACTION_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Runs on a blocking thread: the parser wants a path, so the bytes are
    /// spooled to a temp file that lives until parsing is done.
    fn read_pages(data: Vec<u8>) -> Result<Vec<String>, FileLoaderError> {
        let mut spool = NamedTempFile::new().map_err(|e| extraction_failed("temp file", e))?;
        spool
            .write_all(&data)
            .map_err(|e| extraction_failed("temp file", e))?;
        drop(data);

        let pdf = PdfDocument::open(spool.path())
            .map_err(|e| extraction_failed("failed to parse PDF", e))?;
        let page_count = pdf
            .page_count()
            .map_err(|e| extraction_failed("failed to read page count", e))?;

        let mut pages = Vec::with_capacity(page_count);
        for index in 0..page_count {
            match pdf.extract_text(index) {
                Ok(raw) => {
                    let cleaned = sanitize_extracted_text(&raw);
                    if !cleaned.is_empty() {
                        pages.push(cleaned);
                    }
                }
                Err(e) => tracing::warn!(page = index + 1, error = %e, "Skipping unreadable PDF page"),
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            timeout_secs = self.timeout.as_secs(),
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let owned = data.to_vec();
        let parse = tokio::task::spawn_blocking(move || Self::read_pages(owned));
        let pages = tokio::time::timeout(self.timeout, parse)
            .await
            .map_err(|_| FileLoaderError::TimedOut(self.timeout))?
            .map_err(|e| extraction_failed("PDF worker stopped", e))??;

        tracing::info!(pages_with_text = pages.len(), "PDF text extraction complete");

        if pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(pages.join("\n\n"))
    }
}
