use crate::calc::growth_rates;
use crate::config::ChartSize;
use crate::model::{Component, SeriesTable};
use crate::render::{ChartKind, ChartRenderer};
use crate::Result;
use anyhow::{bail, Context};
use format_num::format_num;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

const FONT: &str = "sans-serif";
const YEAR_LABEL: &str = "Year / ปี";
const VALUE_LABEL: &str = "Value (Billion) / มูลค่า (พันล้าน)";
const GDP_LABEL: &str = "GDP (Billion) / GDP (พันล้าน)";
const GROWTH_LABEL: &str = "Growth Rate (%) / อัตราการเติบโต (%)";

const GROWTH_UP: RGBColor = RGBColor(0x06, 0xA7, 0x7D);
const GROWTH_DOWN: RGBColor = RGBColor(0xD6, 0x28, 0x28);
const TREND_LINE: RGBColor = RGBColor(0x2E, 0x86, 0xAB);

/// Bottom to top.
const STACK: [Component; 4] = [
    Component::Consumption,
    Component::Investment,
    Component::GovernmentSpending,
    Component::NetExports,
];

/// Row by row, three per row.
const GRID: [Component; 6] = [
    Component::Consumption,
    Component::Investment,
    Component::GovernmentSpending,
    Component::Exports,
    Component::Imports,
    Component::Gdp,
];

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Renders charts as SVG files using plotters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SvgRenderer {
    size: ChartSize,
}

impl SvgRenderer {
    pub fn new(size: ChartSize) -> Self {
        Self { size }
    }
}

impl ChartRenderer for SvgRenderer {
    fn render(&self, kind: ChartKind, table: &SeriesTable, path: &Path) -> Result<()> {
        if table.is_empty() {
            bail!("Cannot draw the {kind} chart of an empty table");
        }
        debug!("Drawing the {kind} chart to {}", path.display());

        let dimensions = match kind {
            ChartKind::AllComponents => (
                self.size.width + self.size.width / 3,
                self.size.height + self.size.height * 2 / 3,
            ),
            _ => (self.size.width, self.size.height),
        };
        let root = SVGBackend::new(path, dimensions).into_drawing_area();
        root.fill(&WHITE)?;

        match kind {
            ChartKind::Trend => trend(&root, table)?,
            ChartKind::Components => components(&root, table)?,
            ChartKind::Growth => growth(&root, table)?,
            ChartKind::AllComponents => all_components(&root, table)?,
        }

        root.present()
            .with_context(|| format!("Unable to write chart {}", path.display()))
    }
}

fn trend(root: &Area<'_>, table: &SeriesTable) -> Result<()> {
    let points = series(table, Component::Gdp);
    let mut chart = ChartBuilder::on(root)
        .caption(ChartKind::Trend.title(), title_font(26))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(
            year_range(table),
            value_range(points.iter().map(|p| p.1), false),
        )?;

    chart
        .configure_mesh()
        .x_desc(YEAR_LABEL)
        .y_desc(GDP_LABEL)
        .x_labels(year_labels(table))
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| format_num!(",.0", *y))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            points.iter().copied(),
            TREND_LINE.stroke_width(3),
        ))?
        .label("GDP")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], TREND_LINE.stroke_width(3))
        });

    chart.draw_series(
        points
            .iter()
            .map(|&point| Circle::new(point, 6, TREND_LINE.filled())),
    )?;

    chart.draw_series(points.iter().map(|&(x, y)| {
        EmptyElement::at((x, y))
            + Text::new(format_num!(",.0", y), (-14, -22), (FONT, 12).into_font())
    }))?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

fn components(root: &Area<'_>, table: &SeriesTable) -> Result<()> {
    let years = table.years();
    let mut bottoms = vec![0.0; years.len()];
    let mut layers = Vec::with_capacity(STACK.len());
    for component in STACK {
        let values = table.column(component);
        let layer: Vec<(f64, f64, f64)> = years
            .iter()
            .zip(bottoms.iter_mut())
            .zip(values)
            .map(|((&year, bottom), value)| {
                let start = *bottom;
                *bottom += value;
                (f64::from(year), start, *bottom)
            })
            .collect();
        layers.push((component, layer));
    }

    let extents = layers
        .iter()
        .flat_map(|(_, layer)| layer.iter().flat_map(|&(_, lo, hi)| [lo, hi]));
    let mut chart = ChartBuilder::on(root)
        .caption(ChartKind::Components.title(), title_font(26))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(year_range(table), value_range(extents, true))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(YEAR_LABEL)
        .y_desc(VALUE_LABEL)
        .x_labels(year_labels(table))
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| format_num!(",.0", *y))
        .draw()?;

    for (component, layer) in layers {
        let color = rgb(component);
        chart
            .draw_series(layer.into_iter().map(|(x, lo, hi)| {
                Rectangle::new([(x - 0.3, lo), (x + 0.3, hi)], color.filled())
            }))?
            .label(component.label())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

fn growth(root: &Area<'_>, table: &SeriesTable) -> Result<()> {
    let bars: Vec<(f64, f64)> = table
        .iter()
        .zip(growth_rates(table))
        .filter_map(|(period, rate)| rate.map(|r| (f64::from(period.year()), r)))
        .collect();

    let x_range = year_range(table);
    let (x_start, x_end) = (x_range.start, x_range.end);
    let mut chart = ChartBuilder::on(root)
        .caption(ChartKind::Growth.title(), title_font(26))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, value_range(bars.iter().map(|b| b.1), true))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(YEAR_LABEL)
        .y_desc(GROWTH_LABEL)
        .x_labels(year_labels(table))
        .x_label_formatter(&|x| format!("{x:.0}"))
        .y_label_formatter(&|y| format!("{y:.1}"))
        .draw()?;

    chart.draw_series(bars.iter().map(|&(x, rate)| {
        let color = if rate >= 0.0 { GROWTH_UP } else { GROWTH_DOWN };
        Rectangle::new([(x - 0.3, 0.0), (x + 0.3, rate)], color.mix(0.7).filled())
    }))?;
    chart.draw_series(bars.iter().map(|&(x, rate)| {
        Rectangle::new([(x - 0.3, 0.0), (x + 0.3, rate)], BLACK.stroke_width(1))
    }))?;
    chart.draw_series(LineSeries::new(
        vec![(x_start, 0.0), (x_end, 0.0)],
        BLACK.stroke_width(1),
    ))?;

    chart.draw_series(bars.iter().map(|&(x, rate)| {
        let offset = if rate >= 0.0 { (-14, -18) } else { (-14, 6) };
        EmptyElement::at((x, rate))
            + Text::new(
                format!("{rate:.1}%"),
                offset,
                (FONT, 12).into_font().style(FontStyle::Bold),
            )
    }))?;
    Ok(())
}

fn all_components(root: &Area<'_>, table: &SeriesTable) -> Result<()> {
    let body = root.titled(ChartKind::AllComponents.title(), title_font(30))?;
    let panels = body.split_evenly((2, 3));
    for (panel, component) in panels.iter().zip(GRID) {
        let points = series(table, component);
        let color = rgb(component);
        let mut chart = ChartBuilder::on(panel)
            .caption(component.label(), title_font(16))
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(60)
            .build_cartesian_2d(
                year_range(table),
                value_range(points.iter().map(|p| p.1), false),
            )?;

        chart
            .configure_mesh()
            .x_desc(YEAR_LABEL)
            .y_desc("Value (Billion) / มูลค่า")
            .x_labels(year_labels(table).min(6))
            .x_label_formatter(&|x| format!("{x:.0}"))
            .y_label_formatter(&|y| format_num!(",.0", *y))
            .draw()?;

        chart.draw_series(LineSeries::new(
            points.iter().copied(),
            color.stroke_width(2),
        ))?;
        chart.draw_series(points.iter().map(|&point| Circle::new(point, 4, color.filled())))?;
    }
    Ok(())
}

fn title_font(size: u32) -> FontDesc<'static> {
    (FONT, size).into_font().style(FontStyle::Bold)
}

fn rgb(component: Component) -> RGBColor {
    let (r, g, b) = component.rgb();
    RGBColor(r, g, b)
}

/// `(year, value)` points of one series.
fn series(table: &SeriesTable, component: Component) -> Vec<(f64, f64)> {
    table
        .iter()
        .map(|p| (f64::from(p.year()), p.value(component)))
        .collect()
}

/// Half a year of room on either side of the first and last periods.
fn year_range(table: &SeriesTable) -> Range<f64> {
    let years = table.years();
    let first = years.first().copied().unwrap_or_default();
    let last = years.last().copied().unwrap_or(first);
    f64::from(first) - 0.5..f64::from(last) + 0.5
}

fn year_labels(table: &SeriesTable) -> usize {
    table.len().clamp(1, 12)
}

/// The span of the finite `values` with ten percent of padding. When `include_zero` is set the
/// axis also covers zero, and a series that starts at zero does not get padded below it.
fn value_range(values: impl IntoIterator<Item = f64>, include_zero: bool) -> Range<f64> {
    let (mut lo, mut hi) = if include_zero {
        (0.0, 0.0)
    } else {
        (f64::INFINITY, f64::NEG_INFINITY)
    };
    for v in values.into_iter().filter(|v| v.is_finite()) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo > hi {
        return 0.0..1.0;
    }
    let pad = if hi > lo {
        (hi - lo) * 0.1
    } else {
        hi.abs().max(1.0) * 0.1
    };
    let start = if include_zero && lo == 0.0 { 0.0 } else { lo - pad };
    start..hi + pad
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::SampleGenerator;
    use crate::test::gdp_table;
    use tempfile::TempDir;

    fn draw(kind: ChartKind, table: &SeriesTable) -> String {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(kind.file_name());
        SvgRenderer::default().render(kind, table, &path).unwrap();
        std::fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn test_every_chart_has_its_title() {
        let table = SampleGenerator::default().generate().unwrap();
        for kind in ChartKind::ALL {
            let svg = draw(kind, &table);
            assert!(svg.contains("<svg"), "{kind} is not an SVG document");
            assert!(svg.contains(kind.title()), "{kind} is missing its title");
        }
    }

    #[test]
    fn test_trend_annotates_values() {
        let table = gdp_table(&[8700.0, 9100.0]);
        let svg = draw(ChartKind::Trend, &table);
        assert!(svg.contains("8,700"));
        assert!(svg.contains("9,100"));
    }

    #[test]
    fn test_growth_annotates_rates() {
        let table = gdp_table(&[100.0, 110.0, 99.0]);
        let svg = draw(ChartKind::Growth, &table);
        assert!(svg.contains("10.0%"));
        assert!(svg.contains("-10.0%"));
    }

    #[test]
    fn test_growth_of_single_period_draws_axes_only() {
        let table = gdp_table(&[100.0]);
        let svg = draw(ChartKind::Growth, &table);
        assert!(svg.contains(ChartKind::Growth.title()));
        assert!(!svg.contains(".0%"));
    }

    #[test]
    fn test_components_have_legend() {
        let table = SampleGenerator::new(3, 2020, 1).generate().unwrap();
        let svg = draw(ChartKind::Components, &table);
        for component in STACK {
            assert!(svg.contains(component.thai()));
        }
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("x.svg");
        let result =
            SvgRenderer::default().render(ChartKind::Trend, &SeriesTable::default(), &path);
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_value_range() {
        assert_eq!(value_range([], false), 0.0..1.0);
        assert_eq!(value_range([10.0, 20.0], false), 9.0..21.0);
        assert_eq!(value_range([10.0, 20.0], true), 0.0..22.0);
        assert_eq!(value_range([-10.0, 10.0], true), -12.0..12.0);
        assert_eq!(value_range([5.0, f64::NAN], false), 4.5..5.5);
    }
}
