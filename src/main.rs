use clap::Parser;
use gdp_model::args::{Args, Command};
use gdp_model::{commands, Config, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

pub fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let config_path = args.common().config();

    let _: () = match args.command() {
        Command::Init(init_args) => commands::init(config_path, init_args.force())?.print(),

        Command::Calc(calc_args) => commands::calc(calc_args)?.print(),

        Command::Summary(summary_args) => {
            let config = Config::load_or_default(config_path)?;
            commands::summary(&config, summary_args)?.print()
        }

        Command::Chart(chart_args) => {
            let config = Config::load_or_default(config_path)?;
            commands::chart(&config, chart_args)?.print()
        }

        Command::Run(run_args) => {
            let config = Config::load_or_default(config_path)?;
            commands::run(&config, run_args)?.print()
        }
    };
    Ok(())
}

/// Sends logs from the `gdp` binary and the `gdp_model` library to stderr at `level`, unless
/// `RUST_LOG` is set. Stdout stays free for reports and `calc` results.
fn init_logger(level: LevelFilter) {
    let filter = if std::env::var_os("RUST_LOG").is_some() {
        EnvFilter::from_default_env()
    } else {
        let lib = env!("CARGO_PKG_NAME").replace('-', "_");
        EnvFilter::new(format!(
            "{}={level},{lib}={level}",
            env!("CARGO_CRATE_NAME")
        ))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
