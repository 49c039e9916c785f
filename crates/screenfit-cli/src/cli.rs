use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use screenfit_core::{DeviceCategory, Viewport};

/// Classify screen sizes and scale design measurements.
#[derive(Debug, Parser)]
#[command(name = "screenfit", version, about)]
pub struct Cli {
    /// Emit JSON instead of text (overrides the config file).
    #[arg(long, global = true)]
    pub json: bool,

    /// Read configuration from this file instead of the user config.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the device category, group and orientation of a viewport.
    Classify(SizeArgs),

    /// Scale design measurements to a viewport.
    Scale {
        #[command(flatten)]
        size: SizeArgs,

        /// Horizontal measurement to scale (repeatable).
        #[arg(long = "horizontal", short = 'x', value_name = "VALUE")]
        horizontal: Vec<f64>,

        /// Vertical measurement to scale (repeatable).
        #[arg(long = "vertical", short = 'y', value_name = "VALUE")]
        vertical: Vec<f64>,

        /// Font size to scale (repeatable).
        #[arg(long, short = 'f', value_name = "VALUE")]
        font: Vec<f64>,
    },

    /// Pick a value for a viewport from per-category overrides.
    Resolve {
        #[command(flatten)]
        size: SizeArgs,

        /// Value used when no override along the fallback chain is set.
        #[arg(long)]
        fallback: String,

        /// Per-category override as `category=value` (repeatable).
        #[arg(long = "set", value_name = "CATEGORY=VALUE", value_parser = parse_override)]
        overrides: Vec<(DeviceCategory, String)>,
    },

    /// Print the classification rules and per-category tables.
    Table,
}

#[derive(Debug, Clone, Copy, Args)]
pub struct SizeArgs {
    /// Viewport width in logical units.
    pub width: f64,
    /// Viewport height in logical units.
    pub height: f64,
}

impl From<SizeArgs> for Viewport {
    fn from(size: SizeArgs) -> Self {
        Viewport::new(size.width, size.height)
    }
}

fn parse_override(s: &str) -> Result<(DeviceCategory, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=VALUE, got `{s}`"))?;
    let category = name.parse::<DeviceCategory>().map_err(|e| e.to_string())?;
    Ok((category, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_override() {
        assert_eq!(
            parse_override("smallTablet=2").unwrap(),
            (DeviceCategory::SmallTablet, "2".to_string())
        );
        assert_eq!(
            parse_override("desktop=a=b").unwrap(),
            (DeviceCategory::Desktop, "a=b".to_string())
        );
        assert!(parse_override("tablet").is_err());
        assert!(parse_override("watch=1").is_err());
    }

    #[test]
    fn test_cli_parses_resolve() {
        let cli = Cli::try_parse_from([
            "screenfit",
            "resolve",
            "768",
            "1024",
            "--fallback",
            "one",
            "--set",
            "tablet=two",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::Resolve {
                size,
                fallback,
                overrides,
            } => {
                assert_eq!(size.width, 768.0);
                assert_eq!(fallback, "one");
                assert_eq!(overrides, vec![(DeviceCategory::Tablet, "two".to_string())]);
            }
            other => panic!("Expected Resolve, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
