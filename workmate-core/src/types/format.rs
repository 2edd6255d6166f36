//! Output format types for rendering report results

use serde::{Deserialize, Serialize};

/// Output format for report results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Bordered text table
    #[default]
    Table,
    /// JSON array of row objects
    Json,
    /// CSV with a header row
    Csv,
}
