pub mod engine;
pub mod inspector;
pub mod pipeline;

pub use crate::domain::model::{FileReport, FileStats, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
