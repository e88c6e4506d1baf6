mod huggingface_client;
mod huggingface_provider;
mod model_provider_factory;
mod scaffold_model;
mod scaffold_provider;

pub use huggingface_client::HuggingFaceClient;
pub use huggingface_provider::HuggingFaceProvider;
pub use model_provider_factory::{ModelProviderFactory, ModelProviderFactoryError};
pub use scaffold_model::ScaffoldModel;
pub use scaffold_provider::ScaffoldProvider;
