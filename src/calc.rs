//! The GDP identity and the statistics derived from it.
//!
//! Everything here is a pure function over explicit values. Nothing holds state between calls.

use crate::error::GdpError;
use crate::model::{Component, SeriesTable};
use serde::{Deserialize, Serialize};

/// Computes `consumption + investment + government_spending + (exports - imports)`.
///
/// Values are taken verbatim: negatives and NaN pass straight through the arithmetic.
///
/// ```
/// # use gdp_model::calc::calculate_gdp;
/// assert_eq!(calculate_gdp(5000.0, 1500.0, 2000.0, 1800.0, 1600.0), 8700.0);
/// ```
pub fn calculate_gdp(
    consumption: f64,
    investment: f64,
    government_spending: f64,
    exports: f64,
    imports: f64,
) -> f64 {
    let net_exports = exports - imports;
    consumption + investment + government_spending + net_exports
}

/// The elementwise form of [`calculate_gdp`] over aligned series.
///
/// # Errors
/// - [`GdpError::ShapeMismatch`] if any series differs in length from `consumption`.
pub fn calculate_gdp_series(
    consumption: &[f64],
    investment: &[f64],
    government_spending: &[f64],
    exports: &[f64],
    imports: &[f64],
) -> Result<Vec<f64>, GdpError> {
    let expected = consumption.len();
    let others = [
        (Component::Investment, investment),
        (Component::GovernmentSpending, government_spending),
        (Component::Exports, exports),
        (Component::Imports, imports),
    ];
    for (series, values) in others {
        if values.len() != expected {
            return Err(GdpError::ShapeMismatch {
                series,
                expected,
                actual: values.len(),
            });
        }
    }

    Ok((0..expected)
        .map(|i| {
            calculate_gdp(
                consumption[i],
                investment[i],
                government_spending[i],
                exports[i],
                imports[i],
            )
        })
        .collect())
}

/// Sets GDP and net exports on every period of `table`, overwriting anything already there.
pub fn attach_gdp(mut table: SeriesTable) -> SeriesTable {
    for period in table.periods_mut() {
        let gdp = calculate_gdp(
            period.consumption(),
            period.investment(),
            period.government_spending(),
            period.exports(),
            period.imports(),
        );
        let net_exports = period.exports() - period.imports();
        period.annotate(gdp, net_exports);
    }
    table
}

/// Year-over-year GDP growth in percent. The first period has no predecessor, so its entry is
/// `None`.
pub fn growth_rates(table: &SeriesTable) -> Vec<Option<f64>> {
    let gdp = table.column(Component::Gdp);
    let mut rates = Vec::with_capacity(gdp.len());
    if !gdp.is_empty() {
        rates.push(None);
    }
    rates.extend(
        gdp.windows(2)
            .map(|pair| Some((pair[1] - pair[0]) / pair[0] * 100.0)),
    );
    rates
}

/// Headline figures for a table. Growth figures are `None` when the table has a single period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Summary {
    pub first_period: i32,
    pub last_period: i32,
    pub mean: f64,
    pub max: f64,
    pub max_period: i32,
    pub min: f64,
    pub min_period: i32,
    pub mean_growth_rate: Option<f64>,
    pub max_growth_rate: Option<f64>,
    pub max_growth_period: Option<i32>,
}

/// Computes the [`Summary`] of `table`. Ties for max and min go to the earliest period.
///
/// NaN values are skipped by every aggregate, for GDP and growth alike. When nothing is left to
/// aggregate, GDP figures are NaN at the first period and growth figures are `None`.
///
/// # Errors
/// - [`GdpError::EmptyTable`] if `table` has no periods.
pub fn summary_statistics(table: &SeriesTable) -> Result<Summary, GdpError> {
    let periods = table.periods();
    let (first, last) = match (periods.first(), periods.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(GdpError::EmptyTable),
    };

    let gdp: Vec<(i32, f64)> = periods
        .iter()
        .map(|p| (p.year(), p.gdp()))
        .filter(|(_, v)| !v.is_nan())
        .collect();
    let growth: Vec<(i32, f64)> = periods
        .iter()
        .zip(growth_rates(table))
        .filter_map(|(period, rate)| rate.map(|r| (period.year(), r)))
        .filter(|(_, r)| !r.is_nan())
        .collect();

    let undefined = (first.year(), f64::NAN);
    let (max_period, max) = highest(&gdp).unwrap_or(undefined);
    let (min_period, min) = lowest(&gdp).unwrap_or(undefined);
    let max_growth = highest(&growth);

    Ok(Summary {
        first_period: first.year(),
        last_period: last.year(),
        mean: mean(&gdp).unwrap_or(f64::NAN),
        max,
        max_period,
        min,
        min_period,
        mean_growth_rate: mean(&growth),
        max_growth_rate: max_growth.map(|(_, r)| r),
        max_growth_period: max_growth.map(|(y, _)| y),
    })
}

fn mean(values: &[(i32, f64)]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().map(|(_, v)| v).sum::<f64>() / values.len() as f64)
}

/// The earliest of the largest values.
fn highest(values: &[(i32, f64)]) -> Option<(i32, f64)> {
    values
        .iter()
        .copied()
        .reduce(|best, next| if next.1 > best.1 { next } else { best })
}

/// The earliest of the smallest values.
fn lowest(values: &[(i32, f64)]) -> Option<(i32, f64)> {
    values
        .iter()
        .copied()
        .reduce(|best, next| if next.1 < best.1 { next } else { best })
}
