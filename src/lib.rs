pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::DocsConfig};
pub use crate::core::{
    anagram::AnagramIndex, engine::DocsEngine, readme_pipeline::ReadmePipeline,
};
pub use crate::utils::error::{Result, ToolkitError};
