pub mod inference;
pub mod observability;
pub mod text_processing;
