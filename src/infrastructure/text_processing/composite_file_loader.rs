use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::{DocxAdapter, PdfAdapter, PlainTextAdapter};

/// Picks the extractor registered for a document's declared format.
pub struct CompositeFileLoader {
    extractors: HashMap<ContentType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(extractors: Vec<(ContentType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            extractors: extractors.into_iter().collect(),
        }
    }

    /// PDF, plain text and DOCX.
    pub fn standard(pdf: PdfAdapter) -> Self {
        let pdf: Arc<dyn FileLoader> = Arc::new(pdf);
        let text: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
        let docx: Arc<dyn FileLoader> = Arc::new(DocxAdapter);

        Self::new(vec![
            (ContentType::Pdf, pdf),
            (ContentType::Text, text),
            (ContentType::Docx, docx),
        ])
    }

    pub fn supports(&self, content_type: ContentType) -> bool {
        self.extractors.contains_key(&content_type)
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let Some(extractor) = self.extractors.get(&document.content_type) else {
            tracing::warn!(content_type = %document.content_type, "No extractor registered");
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        };

        tracing::debug!(content_type = %document.content_type, "Routing document to extractor");
        extractor.extract_text(data, document).await
    }
}
