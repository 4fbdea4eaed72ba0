use crate::model::Component;
use thiserror::Error;

pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the GDP computations themselves. These are returned unchanged to the caller, who
/// decides whether to regenerate the input or give up.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GdpError {
    /// The input series passed to an elementwise computation do not have the same length.
    #[error("shape mismatch: {series} has {actual} values but consumption has {expected}")]
    ShapeMismatch {
        series: Component,
        expected: usize,
        actual: usize,
    },

    /// Statistics were requested for a table with no periods.
    #[error("summary statistics require at least one period")]
    EmptyTable,

    /// Periods must be keyed by strictly increasing years.
    #[error("period {next} does not follow period {previous}")]
    UnorderedPeriods { previous: i32, next: i32 },
}
