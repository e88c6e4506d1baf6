use async_trait::async_trait;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

/// Reads body paragraphs of a Word document. Tables, headers and footers are skipped.
pub struct DocxAdapter;

impl DocxAdapter {
    fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
        let mut text = String::new();
        for child in &paragraph.children {
            if let ParagraphChild::Run(run) = child {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        _ => {}
                    }
                }
            }
        }
        text
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Docx {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let docx = docx_rs::read_docx(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to parse DOCX: {e:?}"))
        })?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(Self::paragraph_text(paragraph)),
                _ => None,
            })
            .collect();

        tracing::info!(paragraph_count = paragraphs.len(), "DOCX text extraction complete");

        let text = paragraphs.join("\n").trim().to_string();
        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(text)
    }
}
