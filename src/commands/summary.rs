use crate::args::SummaryArgs;
use crate::calc::{summary_statistics, Summary};
use crate::commands::{sample_table, Out};
use crate::{report, Config, Result};

/// Generates the sample table, computes its summary statistics and prints the report to stdout
/// in the requested format.
///
/// # Errors
/// - Returns an error if the table cannot be generated or has no periods.
pub fn summary(config: &Config, args: &SummaryArgs) -> Result<Out<Summary>> {
    let table = sample_table(config, args.sample())?;
    let summary = summary_statistics(&table)?;
    println!("{}", report::render(args.format(), &table, &summary)?);
    Ok(Out::new(
        format!(
            "Summarized GDP for {} - {}",
            summary.first_period, summary.last_period
        ),
        summary,
    ))
}
