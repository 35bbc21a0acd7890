// File: crates/epi-report/src/cli.rs
// Summary: Command-line arguments for the `statistics-graph` binary.

use std::path::PathBuf;

use clap::Parser;
use epi_chart::{theme, Theme};

use crate::config::{ReportConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};

fn parse_theme(name: &str) -> Result<Theme, String> {
    theme::find(name).ok_or_else(|| {
        let known: Vec<&str> = theme::presets().iter().map(|t| t.name).collect();
        format!("unknown theme '{name}' (known: {})", known.join(", "))
    })
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Plot epidemic simulation statistics to a PNG line chart")]
pub struct Args {
    /// Statistics file written by the simulation
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output image path (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = epi_chart::types::WIDTH, value_parser = clap::value_parser!(i32).range(64..))]
    pub width: i32,

    /// Image height in pixels
    #[arg(long, default_value_t = epi_chart::types::HEIGHT, value_parser = clap::value_parser!(i32).range(64..))]
    pub height: i32,

    /// Color theme (light, dark, solarized-dark, solarized-light, high-contrast-dark)
    #[arg(long, default_value = "light", value_parser = parse_theme)]
    pub theme: Theme,

    /// Draw grid lines at tick positions
    #[arg(long, default_value_t = false)]
    pub grid: bool,
}

impl Args {
    pub fn into_config(self) -> ReportConfig {
        ReportConfig {
            width: self.width,
            height: self.height,
            theme: self.theme,
            grid: self.grid,
            ..ReportConfig::with_paths(self.input, self.output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_legacy_behavior() {
        let cfg = Args::try_parse_from(["statistics-graph"]).unwrap().into_config();
        assert_eq!(cfg.input, PathBuf::from("statistics.csv"));
        assert_eq!(cfg.output, PathBuf::from("Simulation.png"));
        assert_eq!(cfg.theme.name, "light");
        assert!(!cfg.grid);
    }

    #[test]
    fn explicit_paths_and_options() {
        let cfg = Args::try_parse_from([
            "statistics-graph", "run/stats.csv", "-o", "out/chart.png",
            "--width", "1024", "--theme", "dark", "--grid",
        ])
        .unwrap()
        .into_config();
        assert_eq!(cfg.input, PathBuf::from("run/stats.csv"));
        assert_eq!(cfg.output, PathBuf::from("out/chart.png"));
        assert_eq!(cfg.width, 1024);
        assert_eq!(cfg.height, 480);
        assert_eq!(cfg.theme.name, "dark");
        assert!(cfg.grid);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(Args::try_parse_from(["statistics-graph", "--theme", "neon"]).is_err());
    }

    #[test]
    fn tiny_images_are_rejected() {
        assert!(Args::try_parse_from(["statistics-graph", "--width", "10"]).is_err());
    }
}
