//! Core library for Workmate: CSV records, the report registry, the
//! grouped-mean aggregator and result renderers.

pub mod config;
pub mod error;
pub mod loader;
pub mod renderers;
pub mod report;
pub mod system;
pub mod types;

// Re-export commonly used types
pub use config::{load_config, resolve_config, save_config, Config};
pub use error::{WorkmateError, WorkmateResult};
pub use loader::{load_files, LoadOptions};
pub use renderers::render;
pub use report::{GroupedMean, Report, ReportColumns, ReportRegistry, AVERAGE_RATING};

// Re-export core types
pub use types::{OutputFormat, Record, ResultRow};

/// Version information for the Workmate project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
