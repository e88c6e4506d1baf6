mod document_task_service;
mod model_registry;
mod result_combiner;
mod summary_length_policy;

pub use document_task_service::{DocumentTaskService, PipelineError, TaskRequest, Upload};
pub use model_registry::{ModelCatalog, ModelRegistry};
pub use result_combiner::combine_results;
pub use summary_length_policy::SummaryLengthPolicy;
