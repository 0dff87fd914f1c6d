pub mod anagram;
pub mod docs;
pub mod engine;
pub mod interop;
pub mod readme_pipeline;

pub use crate::domain::model::{DocsSnapshot, DocsUpdate, SourceEntry, UpdateReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
