//! Report definitions
//!
//! A [`Report`] turns the combined input records into ranked
//! [`ResultRow`]s. Reports are looked up by name through the
//! [`ReportRegistry`], which the CLI builds once at start-up.
pub mod grouped_mean;
pub mod registry;

pub use grouped_mean::{Accumulator, GroupedMean, ValueError};
pub use registry::{ReportRegistry, AVERAGE_RATING};

use crate::types::{Record, ResultRow};
use crate::WorkmateResult;
use std::fmt;

/// Signature of a plain function report
pub type ReportFn = fn(&[Record]) -> WorkmateResult<Vec<ResultRow>>;

/// Column labels for a report's output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportColumns {
    pub key: String,
    pub value: String,
}

impl ReportColumns {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Header row: unnamed rank column, then key and value
    pub fn headers(&self) -> [&str; 3] {
        ["", self.key.as_str(), self.value.as_str()]
    }
}

/// A report implemented by a plain function
#[derive(Clone)]
pub struct FunctionReport {
    pub name: &'static str,
    pub columns: (&'static str, &'static str),
    pub func: ReportFn,
}

impl fmt::Debug for FunctionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionReport")
            .field("name", &self.name)
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

/// Every kind of report the registry can dispatch to
#[derive(Debug, Clone)]
pub enum Report {
    GroupedMean(GroupedMean),
    Function(FunctionReport),
}

impl Report {
    /// Name the report registers under when none is given
    pub fn natural_name(&self) -> String {
        match self {
            Report::GroupedMean(report) => report.natural_name(),
            Report::Function(report) => report.name.to_string(),
        }
    }

    pub fn columns(&self) -> ReportColumns {
        match self {
            Report::GroupedMean(report) => {
                ReportColumns::new(&report.group_field, &report.value_field)
            }
            Report::Function(report) => ReportColumns::new(report.columns.0, report.columns.1),
        }
    }

    pub fn compute(&self, records: &[Record]) -> WorkmateResult<Vec<ResultRow>> {
        match self {
            Report::GroupedMean(report) => report.compute(records),
            Report::Function(report) => (report.func)(records),
        }
    }
}

impl From<GroupedMean> for Report {
    fn from(report: GroupedMean) -> Self {
        Report::GroupedMean(report)
    }
}

impl From<FunctionReport> for Report {
    fn from(report: FunctionReport) -> Self {
        Report::Function(report)
    }
}
