//! Data module - dataset loading and render-model presentation

mod loader;
mod presenter;
mod record;

pub use loader::{DatasetLoader, LoaderError, DATASET_PATH};
pub use presenter::{FieldCard, RecordCard, RecordPresenter};
pub use record::AppPrivacyRecord;
