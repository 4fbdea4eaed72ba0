//! Types that represent the data model: a yearly `Period` of indicators, the `SeriesTable` that
//! orders them, and the `Component` names of the individual series.
mod component;
mod period;

pub use component::Component;
pub use period::{Period, SeriesTable};
