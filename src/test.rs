//! Shared test utilities.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::calc::attach_gdp;
use crate::model::{Period, SeriesTable};
use crate::Config;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builds an annotated table, starting in 2015, whose GDP column equals `gdp`. All of GDP is
/// carried by consumption so the values come out exact.
pub fn gdp_table(gdp: &[f64]) -> SeriesTable {
    let periods = gdp
        .iter()
        .enumerate()
        .map(|(i, &value)| Period::new(2015 + i as i32, value, 0.0, 0.0, 0.0, 0.0))
        .collect();
    attach_gdp(SeriesTable::new(periods).unwrap())
}

/// `n` reproducible floats spread over negative and positive values, with every tenth one zero.
pub fn seeded_values(seed: u64, n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            if i % 10 == 0 {
                0.0
            } else {
                rng.random_range(-1.0e6..1.0e6)
            }
        })
        .collect()
}

/// Test environment with a temporary directory for config files and chart output.
/// Holds TempDir to keep the directory alive for the duration of the test.
pub struct TestEnv {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl TestEnv {
    /// Creates a test environment with a default config saved in the temporary directory, whose
    /// output directory is `charts` inside it.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("gdp.json");
        let mut config = Config::default();
        config.set_output_dir(temp_dir.path().join("charts"));
        config.save(&config_path).unwrap();
        Self {
            temp_dir,
            config_path,
        }
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the config saved by `new`.
    pub fn config(&self) -> Config {
        Config::load(&self.config_path).unwrap()
    }
}
