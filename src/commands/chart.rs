use crate::args::{ChartArgs, RunArgs};
use crate::calc::summary_statistics;
use crate::commands::{plural, sample_table, Out};
use crate::model::SeriesTable;
use crate::render::{render_all, ChartKind, SvgRenderer};
use crate::{report, Config, Result};
use std::path::{Path, PathBuf};

/// Generates the sample table and draws the requested charts of it.
///
/// Charts go to `--output-dir` when given, otherwise to the `output_dir` of the config file.
///
/// # Errors
/// - Returns an error if the table cannot be generated, or a chart cannot be written.
pub fn chart(config: &Config, args: &ChartArgs) -> Result<Out<Vec<PathBuf>>> {
    let table = sample_table(config, args.sample())?;
    let output_dir = output_dir(config, args.output_dir());
    let paths = draw(config, &args.kinds(), &table, &output_dir)?;
    Ok(Out::new(
        format!(
            "Saved {} chart{} to {}",
            paths.len(),
            plural(paths.len()),
            output_dir.display()
        ),
        paths,
    ))
}

/// Does everything: generates the sample table, prints the text summary, draws every chart and
/// lists the files that were written.
pub fn run(config: &Config, args: &RunArgs) -> Result<Out<Vec<PathBuf>>> {
    let table = sample_table(config, args.sample())?;
    let summary = summary_statistics(&table)?;
    println!("{}", report::text(&table, &summary));

    let output_dir = output_dir(config, args.output_dir());
    let paths = draw(config, &ChartKind::ALL, &table, &output_dir)?;

    println!("Charts / แผนภูมิ:");
    for (kind, path) in ChartKind::ALL.iter().zip(&paths) {
        println!("  - {}: {}", path.display(), kind.description());
    }
    Ok(Out::new(
        format!("Analysis complete, {} charts saved", paths.len()),
        paths,
    ))
}

fn output_dir(config: &Config, flag: Option<&Path>) -> PathBuf {
    match flag {
        Some(dir) => dir.to_path_buf(),
        None => config.output_dir(),
    }
}

fn draw(
    config: &Config,
    kinds: &[ChartKind],
    table: &SeriesTable,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let renderer = SvgRenderer::new(config.chart_size());
    render_all(&renderer, kinds, table, output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::SampleArgs;
    use crate::test::TestEnv;

    #[test]
    fn test_chart_to_config_output_dir() {
        let env = TestEnv::new();
        let args = ChartArgs::new(
            SampleArgs::new(Some(4), None, None),
            None,
            vec![ChartKind::Growth],
        );
        let out = chart(&env.config(), &args).unwrap();
        let charts = env.dir().join("charts");
        assert_eq!(
            out.message(),
            format!("Saved 1 chart to {}", charts.display())
        );
        let paths = out.structure().unwrap();
        assert_eq!(paths, &vec![charts.join("gdp_growth_rate.svg")]);
        assert!(paths[0].is_file());
    }

    #[test]
    fn test_chart_output_dir_flag_wins() {
        let env = TestEnv::new();
        let elsewhere = env.dir().join("elsewhere");
        let args = ChartArgs::new(SampleArgs::default(), Some(elsewhere.clone()), Vec::new());
        let out = chart(&env.config(), &args).unwrap();
        let paths = out.structure().unwrap();
        assert_eq!(paths.len(), ChartKind::ALL.len());
        for (kind, path) in ChartKind::ALL.iter().zip(paths) {
            assert_eq!(path, &elsewhere.join(kind.file_name()));
            assert!(path.is_file());
        }
        assert!(!env.dir().join("charts").exists());
    }

    #[test]
    fn test_run_writes_every_chart() {
        let env = TestEnv::new();
        let args = RunArgs::new(SampleArgs::new(Some(2), Some(1999), Some(3)), None);
        let out = run(&env.config(), &args).unwrap();
        assert_eq!(out.message(), "Analysis complete, 4 charts saved");
        for kind in ChartKind::ALL {
            assert!(env.dir().join("charts").join(kind.file_name()).is_file());
        }
    }
}
