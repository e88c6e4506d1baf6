use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

const UTF8_BOM: char = '\u{FEFF}';

/// Strict UTF-8 decoding; a leading byte-order mark is dropped.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename, bytes = data.len()))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Text {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let decoded = std::str::from_utf8(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("{} is not valid UTF-8: {e}", document.filename))
        })?;
        let text = decoded.trim_start_matches(UTF8_BOM).trim();

        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(text.to_owned())
    }
}
