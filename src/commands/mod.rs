//! Command handlers for the gdp CLI.
//!
//! This module contains implementations for all CLI subcommands.

mod calc;
mod chart;
mod init;
mod summary;

use crate::args::SampleArgs;
use crate::model::SeriesTable;
use crate::{Config, Result};
use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, info};

pub use calc::{calc, Calculated};
pub use chart::{chart, run};
pub use init::init;
pub use summary::summary;

/// What a `gdp` subcommand hands back to `main`: a one-line outcome such as "Saved 4 charts to
/// ./charts", plus the data behind it (a `Summary`, the computed GDP values, the chart paths).
/// Reports and results meant for the user go to stdout from the command itself.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    message: String,
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// An outcome with data attached.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// An outcome with nothing but a message, e.g. from `gdp init`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Logs the outcome at info. The attached data is logged as JSON at debug, so
    /// `--log-level debug` shows e.g. the full summary behind `gdp summary`.
    pub fn print(&self) {
        info!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Result data:\n{json}");
            }
        }
    }
}

/// Generates the sample table described by the config file with the command line overrides
/// applied on top.
fn sample_table(config: &Config, args: &SampleArgs) -> Result<SeriesTable> {
    config
        .sample()
        .with_overrides(args.years(), args.start_year(), args.seed())
        .generate()
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    #[test]
    fn test_out_from_message_has_no_data() {
        let out: Out<Vec<f64>> = "Wrote default settings to gdp.json".into();
        assert_eq!(out.message(), "Wrote default settings to gdp.json");
        assert!(out.structure().is_none());
    }

    #[test]
    fn test_out_serializes_message_and_data() {
        let out = Out::new("Computed GDP for 2 periods", vec![110.0, 223.0]);
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["message"], "Computed GDP for 2 periods");
        assert_eq!(json["structure"][1], 223.0);
    }

    #[test]
    fn test_sample_table_applies_overrides() {
        let env = TestEnv::new();
        let args = SampleArgs::new(Some(2), Some(1990), None);
        let table = sample_table(&env.config(), &args).unwrap();
        assert_eq!(table.years(), vec![1990, 1991]);
        assert!(table.is_annotated());
    }
}
