pub mod args;
pub mod calc;
pub mod commands;
mod config;
mod error;
pub mod model;
pub mod render;
pub mod report;
pub mod sample;
mod utils;

#[cfg(test)]
mod test;

pub use config::{ChartSize, Config, CONFIG_JSON};
pub use error::{Error, GdpError, Result};
