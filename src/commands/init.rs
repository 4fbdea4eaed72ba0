use crate::commands::Out;
use crate::{Config, Result};
use anyhow::Context;
use std::path::Path;

/// Writes a config file holding the default settings to `config_path`.
///
/// # Arguments
/// - `config_path` - Where to write the file, e.g. `./gdp.json`.
/// - `force` - Replace the file if it already exists.
///
/// # Errors
/// - Returns an error if the file exists and `force` is false, or if it cannot be written.
pub fn init(config_path: &Path, force: bool) -> Result<Out<()>> {
    Config::create(config_path, force).context("Unable to create the config file")?;
    Ok(format!("Wrote default settings to {}", config_path.display()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_JSON;
    use crate::sample::SampleGenerator;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_JSON);
        let out = init(&path, false).unwrap();
        assert!(out.message().contains(CONFIG_JSON));
        assert!(out.structure().is_none());
        let config = Config::load(&path).unwrap();
        assert_eq!(config.sample(), SampleGenerator::default());
    }

    #[test]
    fn test_init_twice_needs_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_JSON);
        init(&path, false).unwrap();
        let err = init(&path, false).unwrap_err();
        assert!(format!("{err:#}").contains("--force"));
        init(&path, true).unwrap();
    }
}
