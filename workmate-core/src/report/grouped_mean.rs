//! Grouped arithmetic mean
//!
//! Records are bucketed by a key field and the mean of a numeric field is
//! computed per bucket. Groups are ranked by mean descending; equal means
//! fall back to ascending key order so output never depends on hash order.

use crate::error::Location;
use crate::types::{Record, ResultRow};
use crate::{WorkmateError, WorkmateResult};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// A raw field value that cannot be added to a running mean
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("value '{0}' is not a number")]
    NotANumber(String),

    #[error("value '{0}' is not a finite number")]
    NotFinite(String),

    #[error("value '{0}' overflows the group total")]
    Overflow(String),
}

/// Running sum and count for one group
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulator {
    pub sum: f64,
    pub count: u64,
}

impl Accumulator {
    /// Fold one raw value in. Surrounding whitespace is ignored.
    pub fn fold(self, raw: &str) -> Result<Self, ValueError> {
        let trimmed = raw.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| ValueError::NotANumber(raw.to_string()))?;
        if !value.is_finite() {
            return Err(ValueError::NotFinite(raw.to_string()));
        }
        let sum = self.sum + value;
        if !sum.is_finite() {
            return Err(ValueError::Overflow(raw.to_string()));
        }
        Ok(Self {
            sum,
            count: self.count + 1,
        })
    }

    /// `None` until at least one value has been folded in
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Mean of `value_field` per distinct `group_field`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedMean {
    pub group_field: String,
    pub value_field: String,
}

impl GroupedMean {
    pub fn new(group_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        Self {
            group_field: group_field.into(),
            value_field: value_field.into(),
        }
    }

    /// Name used when registered without an explicit one
    pub fn natural_name(&self) -> String {
        format!("mean-{}-by-{}", self.value_field, self.group_field)
    }

    pub fn compute(&self, records: &[Record]) -> WorkmateResult<Vec<ResultRow>> {
        let mut groups: HashMap<&str, Accumulator> = HashMap::new();

        for (position, record) in records.iter().enumerate() {
            let key = self.field(position, record, &self.group_field)?;
            let raw = self.field(position, record, &self.value_field)?;

            let acc = groups.entry(key).or_default();
            *acc = acc.fold(raw).map_err(|e| malformed(position, record, e.to_string()))?;
        }

        debug!(
            "Grouped {} records into {} groups by '{}'",
            records.len(),
            groups.len(),
            self.group_field
        );

        let mut means: Vec<(&str, f64)> = groups
            .into_iter()
            .filter_map(|(key, acc)| acc.mean().map(|mean| (key, mean)))
            .collect();
        means.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        Ok(means
            .into_iter()
            .enumerate()
            .map(|(i, (key, mean))| ResultRow::new(i + 1, key, mean))
            .collect())
    }

    fn field<'r>(&self, position: usize, record: &'r Record, name: &str) -> WorkmateResult<&'r str> {
        record
            .get(name)
            .ok_or_else(|| malformed(position, record, format!("missing field '{}'", name)))
    }
}

fn malformed(position: usize, record: &Record, reason: String) -> WorkmateError {
    WorkmateError::MalformedRecord {
        index: position + 1,
        location: Location(record.origin().cloned()),
        reason,
    }
}
