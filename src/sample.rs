//! Seeded sample data.
//!
//! Each input series follows a linear trend from a base value plus normally distributed noise.
//! The generator is deterministic given the same seed.

use crate::calc::attach_gdp;
use crate::model::{Component, Period, SeriesTable};
use crate::Result;
use anyhow::{bail, Context};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_YEARS: usize = 10;
pub const DEFAULT_START_YEAR: i32 = 2015;
pub const DEFAULT_SEED: u64 = 42;

/// The shape of one generated input series: `base + i * trend + N(0, sigma)` for offset `i`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Profile {
    component: Component,
    base: f64,
    trend: f64,
    sigma: f64,
}

/// Generated in this order, one full column at a time, from a single RNG.
const PROFILES: [Profile; 5] = [
    Profile {
        component: Component::Consumption,
        base: 5000.0,
        trend: 200.0,
        sigma: 100.0,
    },
    Profile {
        component: Component::Investment,
        base: 1500.0,
        trend: 80.0,
        sigma: 50.0,
    },
    Profile {
        component: Component::GovernmentSpending,
        base: 2000.0,
        trend: 100.0,
        sigma: 60.0,
    },
    Profile {
        component: Component::Exports,
        base: 1800.0,
        trend: 90.0,
        sigma: 70.0,
    },
    Profile {
        component: Component::Imports,
        base: 1600.0,
        trend: 85.0,
        sigma: 65.0,
    },
];

/// Settings for generating a sample `SeriesTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SampleGenerator {
    /// Number of yearly periods to generate.
    years: usize,
    /// The year of the first period.
    start_year: i32,
    /// RNG seed.
    seed: u64,
}

impl Default for SampleGenerator {
    fn default() -> Self {
        Self {
            years: DEFAULT_YEARS,
            start_year: DEFAULT_START_YEAR,
            seed: DEFAULT_SEED,
        }
    }
}

impl SampleGenerator {
    pub fn new(years: usize, start_year: i32, seed: u64) -> Self {
        Self {
            years,
            start_year,
            seed,
        }
    }

    pub fn years(&self) -> usize {
        self.years
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns a copy with any `Some` argument replacing the current setting.
    pub fn with_overrides(
        self,
        years: Option<usize>,
        start_year: Option<i32>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            years: years.unwrap_or(self.years),
            start_year: start_year.unwrap_or(self.start_year),
            seed: seed.unwrap_or(self.seed),
        }
    }

    /// Generates the table and attaches GDP and net exports to it.
    ///
    /// # Errors
    /// - Returns an error if the years would overflow `i32`.
    pub fn generate(&self) -> Result<SeriesTable> {
        debug!(
            "Generating {} years of sample data from {} with seed {}",
            self.years, self.start_year, self.seed
        );
        // Every year must fit in an i32 before anything is allocated.
        let fits = match self.years.checked_sub(1) {
            None => true,
            Some(last) => i32::try_from(last)
                .ok()
                .and_then(|offset| self.start_year.checked_add(offset))
                .is_some(),
        };
        if !fits {
            bail!(
                "{} years from {} does not fit in a year number",
                self.years,
                self.start_year
            );
        }

        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut columns: Vec<Vec<f64>> = Vec::with_capacity(PROFILES.len());
        for profile in PROFILES {
            let noise = Normal::new(0.0, profile.sigma)
                .with_context(|| format!("Invalid noise for {}", profile.component))?;
            let column = (0..self.years)
                .map(|i| profile.base + i as f64 * profile.trend + noise.sample(&mut rng))
                .collect();
            columns.push(column);
        }

        let periods: Vec<Period> = (0..self.years)
            .map(|i| {
                Period::new(
                    self.start_year + i as i32,
                    columns[0][i],
                    columns[1][i],
                    columns[2][i],
                    columns[3][i],
                    columns[4][i],
                )
            })
            .collect();

        let table = SeriesTable::new(periods)?;
        Ok(attach_gdp(table))
    }
}
