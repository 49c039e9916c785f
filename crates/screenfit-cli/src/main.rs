mod cli;
mod report;

use std::process::ExitCode;

use clap::Parser;
use screenfit_core::{Overrides, ScreenContext, ScreenError, ScreenfitConfig};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use report::{ClassifyReport, ResolveReport, ScaleReport, TableReport};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ScreenfitConfig::load_from(path),
        None => ScreenfitConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("screenfit: {e}");
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("screenfit: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: &ScreenfitConfig) -> Result<(), ScreenError> {
    let json = cli.json || config.output.json;

    match cli.command {
        Command::Classify(size) => {
            let ctx = ScreenContext::new(size.into());
            let report = ClassifyReport::new(&ctx);
            emit(json, &report, || report.render())
        }
        Command::Scale {
            size,
            horizontal,
            vertical,
            font,
        } => {
            let ctx = ScreenContext::new(size.into());
            let report = ScaleReport::new(&ctx, &horizontal, &vertical, &font);
            emit(json, &report, || report.render(config.output.precision))
        }
        Command::Resolve {
            size,
            fallback,
            overrides,
        } => {
            let mut set = Overrides::new(fallback);
            set.extend(overrides);
            let ctx = ScreenContext::new(size.into());
            let report = ResolveReport::new(&ctx, &set);
            emit(json, &report, || report.render())
        }
        Command::Table => {
            let report = TableReport::new();
            emit(json, &report, || report.render())
        }
    }
}

fn emit<T: Serialize>(
    json: bool,
    report: &T,
    text: impl FnOnce() -> String,
) -> Result<(), ScreenError> {
    if json {
        let out = serde_json::to_string_pretty(report).map_err(std::io::Error::from)?;
        println!("{out}");
    } else {
        println!("{}", text());
    }
    Ok(())
}
