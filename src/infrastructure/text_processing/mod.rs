mod bounded_window_splitter;
mod character_counter;
mod composite_file_loader;
mod docx_adapter;
mod hf_tokenizer_counter;
mod pdf_adapter;
mod plain_text_adapter;
mod text_sanitizer;
mod text_splitter_factory;
mod word_counter;

pub use bounded_window_splitter::BoundedWindowSplitter;
pub use character_counter::CharacterCounter;
pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::DocxAdapter;
pub use hf_tokenizer_counter::HfTokenizerCounter;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use text_sanitizer::sanitize_extracted_text;
pub use text_splitter_factory::{TextSplitterFactory, TextSplitterFactoryError};
pub use word_counter::WordCounter;
