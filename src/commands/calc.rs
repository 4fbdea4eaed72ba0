use crate::args::CalcArgs;
use crate::calc::{calculate_gdp, calculate_gdp_series};
use crate::commands::{plural, Out};
use crate::Result;
use format_num::format_num;
use serde::Serialize;

/// GDP and net exports computed from values given on the command line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculated {
    pub gdp: Vec<f64>,
    pub net_exports: Vec<f64>,
}

/// Computes GDP from the values in `args` and prints one GDP figure per line to stdout.
///
/// When every list holds exactly one value the scalar formula is used, otherwise the lists are
/// treated as aligned series.
///
/// # Errors
/// - Returns [`crate::GdpError::ShapeMismatch`] if the lists differ in length.
pub fn calc(args: &CalcArgs) -> Result<Out<Calculated>> {
    let inputs = [
        args.consumption(),
        args.investment(),
        args.government_spending(),
        args.exports(),
        args.imports(),
    ];

    let gdp = if inputs.iter().all(|values| values.len() == 1) {
        vec![calculate_gdp(
            inputs[0][0],
            inputs[1][0],
            inputs[2][0],
            inputs[3][0],
            inputs[4][0],
        )]
    } else {
        calculate_gdp_series(inputs[0], inputs[1], inputs[2], inputs[3], inputs[4])?
    };
    let net_exports = args
        .exports()
        .iter()
        .zip(args.imports())
        .map(|(x, m)| x - m)
        .collect();

    for value in &gdp {
        println!("{value}");
    }

    let message = match gdp.as_slice() {
        [single] if single.is_finite() => format!("GDP = {}", format_num!(",.2", *single)),
        _ => format!("Computed GDP for {} period{}", gdp.len(), plural(gdp.len())),
    };
    Ok(Out::new(message, Calculated { gdp, net_exports }))
}
