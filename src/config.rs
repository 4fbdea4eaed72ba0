//! Configuration file handling.
//!
//! The configuration file defaults to `./gdp.json`. It holds the sample-data settings, the
//! directory charts are written to and the chart dimensions. Every section is optional and falls
//! back to its default, and a missing file means the whole default configuration.

use crate::sample::SampleGenerator;
use crate::{utils, Result};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME: &str = "gdp";
const CONFIG_VERSION: u8 = 1;
const DEFAULT_WIDTH: u32 = 1200;
const DEFAULT_HEIGHT: u32 = 600;

/// The default name of the configuration file.
pub const CONFIG_JSON: &str = "gdp.json";

/// The `Config` object represents the configuration of the app. Relative paths found in the file
/// are resolved against the directory that holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    root: PathBuf,
    config_file: ConfigFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            config_file: ConfigFile::default(),
        }
    }
}

impl Config {
    /// Writes a default configuration file to `path`.
    ///
    /// # Errors
    /// - Returns an error if `path` already exists and `force` is false, or if writing fails.
    pub fn create(path: impl AsRef<Path>, force: bool) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() && !force {
            bail!(
                "The config file '{}' already exists, use --force to overwrite it",
                path.display()
            )
        }
        let config = Self {
            root: parent_dir(path),
            config_file: ConfigFile::default(),
        };
        config.save(path)?;
        Ok(config)
    }

    /// Loads and validates the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_file = ConfigFile::load(path)?;
        Ok(Self {
            root: parent_dir(path),
            config_file,
        })
    }

    /// Loads the configuration file at `path` if there is one, otherwise returns the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            debug!("Loading config from {}", path.display());
            Self::load(path)
        } else {
            debug!("No config file at {}, using defaults", path.display());
            Ok(Self {
                root: parent_dir(path),
                config_file: ConfigFile::default(),
            })
        }
    }

    /// Saves the configuration to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.config_file.save(path)
    }

    pub fn sample(&self) -> SampleGenerator {
        self.config_file.sample
    }

    /// Returns the stored `output_dir` if it is absolute, otherwise resolves the relative path.
    pub fn output_dir(&self) -> PathBuf {
        let p = &self.config_file.output_dir;
        if p.is_absolute() {
            return p.clone();
        }
        self.root.join(p)
    }

    pub fn set_output_dir(&mut self, output_dir: impl Into<PathBuf>) {
        self.config_file.output_dir = output_dir.into();
    }

    pub fn chart_size(&self) -> ChartSize {
        self.config_file.chart
    }
}

/// Pixel dimensions of a single chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ChartSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "gdp",
///   "config_version": 1,
///   "sample": { "years": 10, "start_year": 2015, "seed": 42 },
///   "output_dir": ".",
///   "chart": { "width": 1200, "height": 600 }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "gdp"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// Settings for the sample-data generator
    #[serde(default)]
    sample: SampleGenerator,

    /// Where charts are written (relative to the config file or absolute)
    #[serde(default = "default_output_dir")]
    output_dir: PathBuf,

    /// Chart dimensions in pixels
    #[serde(default)]
    chart: ChartSize,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            sample: SampleGenerator::default(),
            output_dir: default_output_dir(),
            chart: ChartSize::default(),
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or names another application.
    fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = utils::read_to_string(path)?;

        let config: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );

        Ok(config)
    }

    fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(p, data).context("Unable to write config file")
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
