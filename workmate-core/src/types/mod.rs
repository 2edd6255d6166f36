/// Core types shared across all Workmate modules
pub mod format;
pub mod record;
pub mod row;

// Re-export commonly used types at module level
pub use format::OutputFormat;
pub use record::{Origin, Record};
pub use row::{ResultRow, VALUE_PRECISION};
