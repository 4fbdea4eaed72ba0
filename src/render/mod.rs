//! Chart rendering.
//!
//! A [`ChartRenderer`] receives a finished `SeriesTable` and owns every presentation concern:
//! layout, bilingual labels, colours and file output. Nothing here feeds back into the table.

mod svg;

use crate::model::SeriesTable;
use crate::{utils, Result};
use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub use svg::SvgRenderer;

/// The charts that can be drawn from a table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    /// GDP over time as a line with the value annotated at each year.
    Trend,
    /// Stacked bars of consumption, investment, government spending and net exports.
    Components,
    /// Year-over-year growth rate bars.
    Growth,
    /// One small line chart per input series and one for GDP.
    AllComponents,
}

serde_plain::derive_display_from_serialize!(ChartKind);
serde_plain::derive_fromstr_from_deserialize!(ChartKind);

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Trend,
        ChartKind::Components,
        ChartKind::Growth,
        ChartKind::AllComponents,
    ];

    /// The file name this chart is saved under.
    pub fn file_name(&self) -> &'static str {
        match self {
            ChartKind::Trend => "gdp_trend.svg",
            ChartKind::Components => "gdp_components.svg",
            ChartKind::Growth => "gdp_growth_rate.svg",
            ChartKind::AllComponents => "all_components_trends.svg",
        }
    }

    /// The chart title.
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::Trend => "GDP Trend Over Time / แนวโน้ม GDP ตามช่วงเวลา",
            ChartKind::Components => "GDP Components / องค์ประกอบของ GDP",
            ChartKind::Growth => "GDP Growth Rate / อัตราการเติบโตของ GDP",
            ChartKind::AllComponents => "GDP Components Trends / แนวโน้มองค์ประกอบของ GDP",
        }
    }

    /// A short description for listing the written files.
    pub fn description(&self) -> &'static str {
        match self {
            ChartKind::Trend => "กราฟแนวโน้ม GDP",
            ChartKind::Components => "กราฟองค์ประกอบของ GDP",
            ChartKind::Growth => "กราฟอัตราการเติบโต",
            ChartKind::AllComponents => "กราฟแนวโน้มทุกองค์ประกอบ",
        }
    }
}

/// Draws one chart of a table to a file.
pub trait ChartRenderer {
    /// Draws `kind` for `table` and saves it at `path`.
    ///
    /// # Errors
    /// - Returns an error if `table` is empty or the file cannot be written.
    fn render(&self, kind: ChartKind, table: &SeriesTable, path: &Path) -> Result<()>;
}

/// Renders each of `kinds` into `output_dir`, creating the directory if needed, and returns the
/// written paths in the same order.
pub fn render_all(
    renderer: &dyn ChartRenderer,
    kinds: &[ChartKind],
    table: &SeriesTable,
    output_dir: &Path,
) -> Result<Vec<PathBuf>> {
    if table.is_empty() {
        bail!("There is no data to chart, generate at least one period first");
    }
    utils::make_dir(output_dir)?;
    let mut paths = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let path = output_dir.join(kind.file_name());
        renderer.render(kind, table, &path)?;
        info!("✓ Saved chart at: {}", path.display());
        paths.push(path);
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::gdp_table;
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// Records what it was asked to draw instead of drawing it.
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(ChartKind, usize, PathBuf)>>,
    }

    impl ChartRenderer for Recorder {
        fn render(&self, kind: ChartKind, table: &SeriesTable, path: &Path) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((kind, table.len(), path.to_path_buf()));
            Ok(())
        }
    }

    #[test]
    fn test_render_all_creates_dir_and_keeps_order() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("nested").join("charts");
        let recorder = Recorder::default();
        let table = gdp_table(&[1.0, 2.0, 3.0]);

        let kinds = [ChartKind::Growth, ChartKind::Trend];
        let paths = render_all(&recorder, &kinds, &table, &out).unwrap();

        assert!(out.is_dir());
        assert_eq!(
            paths,
            vec![out.join("gdp_growth_rate.svg"), out.join("gdp_trend.svg")]
        );
        let calls = recorder.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, ChartKind::Growth);
        assert_eq!(calls[0].1, 3);
    }

    #[test]
    fn test_render_all_rejects_empty_table() {
        let dir = TempDir::new().unwrap();
        let recorder = Recorder::default();
        let result = render_all(
            &recorder,
            &ChartKind::ALL,
            &SeriesTable::default(),
            dir.path(),
        );
        assert!(result.is_err());
        assert!(recorder.calls.borrow().is_empty());
    }

    #[test]
    fn test_chart_kind_names() {
        assert_eq!(ChartKind::AllComponents.to_string(), "all-components");
        assert_eq!(
            "growth".parse::<ChartKind>().unwrap(),
            ChartKind::Growth
        );
    }
}
