//! Console renditions of a table and its summary: the bilingual text report, JSON and CSV.

use crate::calc::Summary;
use crate::model::{Component, SeriesTable};
use crate::Result;
use anyhow::Context;
use chrono::{DateTime, Utc};
use format_num::format_num;
use serde::{Deserialize, Serialize};

const WIDTH: usize = 70;

/// How a summary is written to stdout.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The bilingual summary followed by the yearly table.
    #[default]
    Text,
    /// A JSON document holding the summary and every period.
    Json,
    /// The yearly table as CSV.
    Csv,
}

serde_plain::derive_display_from_serialize!(OutputFormat);
serde_plain::derive_fromstr_from_deserialize!(OutputFormat);

/// Renders `table` and `summary` in the requested `format`.
pub fn render(format: OutputFormat, table: &SeriesTable, summary: &Summary) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text(table, summary)),
        OutputFormat::Json => json(table, summary),
        OutputFormat::Csv => csv(table),
    }
}

/// The bilingual summary block followed by the year-by-year table.
pub fn text(table: &SeriesTable, summary: &Summary) -> String {
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);
    let max_growth_year = summary
        .max_growth_period
        .map(|year| format!(" (ปี / year {year})"))
        .unwrap_or_default();

    let lines = [
        String::new(),
        heavy.clone(),
        format!("{:^width$}", "GDP SUMMARY / สรุปข้อมูล GDP", width = WIDTH),
        heavy.clone(),
        String::new(),
        format!(
            "ช่วงเวลา / Period: {} - {}",
            summary.first_period, summary.last_period
        ),
        String::new(),
        format!(
            "GDP เฉลี่ย / Mean GDP: {} พันล้าน / billion",
            amount(summary.mean)
        ),
        format!(
            "GDP สูงสุด / Max GDP: {} พันล้าน / billion (ปี / year {})",
            amount(summary.max),
            summary.max_period
        ),
        format!(
            "GDP ต่ำสุด / Min GDP: {} พันล้าน / billion (ปี / year {})",
            amount(summary.min),
            summary.min_period
        ),
        String::new(),
        format!(
            "อัตราการเติบโตเฉลี่ย / Mean growth rate: {}",
            percent(summary.mean_growth_rate)
        ),
        format!(
            "อัตราการเติบโตสูงสุด / Max growth rate: {}{max_growth_year}",
            percent(summary.max_growth_rate)
        ),
        String::new(),
        light.clone(),
        format!("{:^width$}", "ข้อมูลรายปี / Yearly data", width = WIDTH),
        light,
    ];

    let mut s = lines.join("\n");
    s.push('\n');
    s.push_str(&yearly_table(table));
    s.push_str(&heavy);
    s.push('\n');
    s
}

/// The columns of the yearly table, after `Year`.
const COLUMNS: [Component; 7] = [
    Component::Consumption,
    Component::Investment,
    Component::GovernmentSpending,
    Component::Exports,
    Component::Imports,
    Component::Gdp,
    Component::NetExports,
];

fn yearly_table(table: &SeriesTable) -> String {
    let cells: Vec<Vec<String>> = table
        .iter()
        .map(|p| COLUMNS.iter().map(|&c| amount(p.value(c))).collect())
        .collect();
    let widths: Vec<usize> = COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| {
            cells
                .iter()
                .map(|row| row[i].len())
                .chain([c.column().len()])
                .max()
                .unwrap_or_default()
        })
        .collect();

    let header = COLUMNS.iter().map(|c| c.column());
    let mut s = row("Year", header, &widths);
    for (period, values) in table.iter().zip(&cells) {
        s.push_str(&row(
            &period.year().to_string(),
            values.iter().map(String::as_str),
            &widths,
        ));
    }
    s
}

/// One right-aligned line of the yearly table.
fn row<'a>(year: &str, cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = format!("{year:>4}");
    for (cell, &w) in cells.zip(widths) {
        line.push_str(&format!("  {cell:>w$}"));
    }
    line.push('\n');
    line
}

#[derive(Serialize)]
struct Document<'a> {
    generated_at: DateTime<Utc>,
    summary: &'a Summary,
    periods: &'a SeriesTable,
}

/// A pretty-printed JSON document with the summary and every period.
pub fn json(table: &SeriesTable, summary: &Summary) -> Result<String> {
    let document = Document {
        generated_at: Utc::now(),
        summary,
        periods: table,
    };
    serde_json::to_string_pretty(&document).context("Unable to serialize the GDP report")
}

/// The table as CSV, with a header row.
pub fn csv(table: &SeriesTable) -> Result<String> {
    let mut wtr = ::csv::Writer::from_writer(Vec::new());
    for period in table {
        wtr.serialize(period)
            .with_context(|| format!("Unable to write period {} as CSV", period.year()))?;
    }
    let bytes = wtr.into_inner().context("Unable to flush CSV output")?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

fn amount(v: f64) -> String {
    if v.is_finite() {
        format_num!(",.2", v)
    } else {
        v.to_string()
    }
}

fn percent(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{r:.2}%"),
        None => String::from("n/a"),
    }
}
