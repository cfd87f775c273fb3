pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::LocalStorage;
pub use config::toml_config::TomlConfig;

pub use crate::core::{engine::TransformEngine, inspector::Inspector, pipeline::ReversalPipeline};
pub use utils::error::{Result, ToolkitError};
