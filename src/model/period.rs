use crate::calc::calculate_gdp;
use crate::error::GdpError;
use crate::model::Component;
use serde::{Deserialize, Serialize};

/// The economic indicators of a single year.
///
/// `gdp` and `net_exports` are derived fields. They are empty until the period passes through
/// [`attach_gdp`](crate::calc::attach_gdp), but the accessors always answer with the value the
/// GDP identity gives, so a reader can never observe a period that violates it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Period {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Consumption")]
    consumption: f64,
    #[serde(rename = "Investment")]
    investment: f64,
    #[serde(rename = "Government_Spending")]
    government_spending: f64,
    #[serde(rename = "Exports")]
    exports: f64,
    #[serde(rename = "Imports")]
    imports: f64,
    #[serde(rename = "GDP")]
    gdp: Option<f64>,
    #[serde(rename = "Net_Exports")]
    net_exports: Option<f64>,
}

impl Period {
    pub fn new(
        year: i32,
        consumption: f64,
        investment: f64,
        government_spending: f64,
        exports: f64,
        imports: f64,
    ) -> Self {
        Self {
            year,
            consumption,
            investment,
            government_spending,
            exports,
            imports,
            gdp: None,
            net_exports: None,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn consumption(&self) -> f64 {
        self.consumption
    }

    pub fn investment(&self) -> f64 {
        self.investment
    }

    pub fn government_spending(&self) -> f64 {
        self.government_spending
    }

    pub fn exports(&self) -> f64 {
        self.exports
    }

    pub fn imports(&self) -> f64 {
        self.imports
    }

    /// GDP of this period, as attached or, if not yet attached, as computed from the inputs.
    pub fn gdp(&self) -> f64 {
        self.gdp.unwrap_or_else(|| {
            calculate_gdp(
                self.consumption,
                self.investment,
                self.government_spending,
                self.exports,
                self.imports,
            )
        })
    }

    pub fn net_exports(&self) -> f64 {
        self.net_exports.unwrap_or(self.exports - self.imports)
    }

    /// Whether the derived fields have been attached.
    pub fn is_annotated(&self) -> bool {
        self.gdp.is_some() && self.net_exports.is_some()
    }

    /// The value of `component` in this period.
    pub fn value(&self, component: Component) -> f64 {
        match component {
            Component::Consumption => self.consumption,
            Component::Investment => self.investment,
            Component::GovernmentSpending => self.government_spending,
            Component::Exports => self.exports,
            Component::Imports => self.imports,
            Component::NetExports => self.net_exports(),
            Component::Gdp => self.gdp(),
        }
    }

    /// Overwrites the derived fields.
    pub(crate) fn annotate(&mut self, gdp: f64, net_exports: f64) {
        self.gdp = Some(gdp);
        self.net_exports = Some(net_exports);
    }
}

/// An ordered table of periods keyed by strictly increasing years.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SeriesTable {
    periods: Vec<Period>,
}

impl SeriesTable {
    /// Creates a table from `periods`, which must be in strictly increasing year order.
    pub fn new(periods: Vec<Period>) -> Result<Self, GdpError> {
        for pair in periods.windows(2) {
            if pair[1].year <= pair[0].year {
                return Err(GdpError::UnorderedPeriods {
                    previous: pair[0].year,
                    next: pair[1].year,
                });
            }
        }
        Ok(Self { periods })
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Period> {
        self.periods.iter()
    }

    pub fn years(&self) -> Vec<i32> {
        self.periods.iter().map(Period::year).collect()
    }

    /// All values of `component`, in period order.
    pub fn column(&self, component: Component) -> Vec<f64> {
        self.periods.iter().map(|p| p.value(component)).collect()
    }

    /// Whether every period carries its derived fields.
    pub fn is_annotated(&self) -> bool {
        self.periods.iter().all(Period::is_annotated)
    }

    pub(crate) fn periods_mut(&mut self) -> &mut [Period] {
        &mut self.periods
    }
}

impl<'a> IntoIterator for &'a SeriesTable {
    type Item = &'a Period;
    type IntoIter = std::slice::Iter<'a, Period>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
