// Request handlers, one module per resource
pub mod datasets;

pub use datasets::{dataset_delete, dataset_get, dataset_list, dataset_save};
