//! Name -> report registry

use super::{GroupedMean, Report};
use crate::{WorkmateError, WorkmateResult};
use std::collections::BTreeMap;
use tracing::debug;

/// Registered name of the average rating per brand report
pub const AVERAGE_RATING: &str = "average-rating";

/// Reports available for dispatch, keyed by name.
///
/// Registering under a name that is already taken replaces the earlier
/// report; the replaced one is handed back to the caller.
#[derive(Debug, Clone, Default)]
pub struct ReportRegistry {
    reports: BTreeMap<String, Report>,
}

impl ReportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in report
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(AVERAGE_RATING, GroupedMean::new("brand", "rating").into());
        registry
    }

    pub fn register(&mut self, name: impl Into<String>, report: Report) -> Option<Report> {
        let name = name.into();
        let previous = self.reports.insert(name.clone(), report);
        if previous.is_some() {
            debug!("Report '{}' replaced by a new registration", name);
        }
        previous
    }

    /// Register under the report's natural name
    pub fn register_default(&mut self, report: Report) -> Option<Report> {
        let name = report.natural_name();
        self.register(name, report)
    }

    pub fn lookup(&self, name: &str) -> WorkmateResult<&Report> {
        self.reports
            .get(name)
            .ok_or_else(|| WorkmateError::NotFound(name.to_string()))
    }

    /// Registered names in ascending order
    pub fn list_names(&self) -> Vec<&str> {
        self.reports.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.reports.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
