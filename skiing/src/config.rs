//! Command-line options and the run configurations built from them.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use skiing_paths::Strategy;

/// Find the longest, steepest ski run on an elevation map.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Opts {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a map file and print the best run.
    Solve(SolveArgs),
    /// Print a random map in the map-file format.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Map file: a "rows cols" header followed by one line per row.
    pub map: PathBuf,

    /// Traversal strategy: exhaustive, peaks, ascending or parallel.
    #[arg(short, long, default_value_t = Strategy::Exhaustive)]
    pub strategy: Strategy,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[arg(long, default_value_t = 1000)]
    pub rows: usize,

    #[arg(long, default_value_t = 1000)]
    pub cols: usize,

    /// Elevations are drawn uniformly from 0..=MAX_ELEVATION.
    #[arg(long, default_value_t = 1500)]
    pub max_elevation: i32,

    /// Seed for a reproducible map.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// How a report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings for one solve run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub map: PathBuf,
    pub strategy: Strategy,
    pub format: OutputFormat,
}

impl RunConfig {
    pub fn new(map: impl Into<PathBuf>) -> Self {
        Self {
            map: map.into(),
            strategy: Strategy::default(),
            format: OutputFormat::default(),
        }
    }
}

impl From<&SolveArgs> for RunConfig {
    fn from(args: &SolveArgs) -> Self {
        Self {
            map: args.map.clone(),
            strategy: args.strategy,
            format: if args.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}

/// Settings for random map generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub rows: usize,
    pub cols: usize,
    pub max_elevation: i32,
    pub seed: Option<u64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            rows: 1000,
            cols: 1000,
            max_elevation: 1500,
            seed: None,
        }
    }
}

impl From<&GenerateArgs> for GenerateConfig {
    fn from(args: &GenerateArgs) -> Self {
        Self {
            rows: args.rows,
            cols: args.cols,
            max_elevation: args.max_elevation.max(0),
            seed: args.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_solve_args() {
        let opts = Opts::try_parse_from([
            "skiing", "-vv", "solve", "map.txt", "-s", "peaks", "--json",
        ])
        .unwrap();
        assert_eq!(opts.verbose, 2);
        let Command::Solve(args) = opts.command else {
            panic!("expected solve");
        };
        let cfg = RunConfig::from(&args);
        assert_eq!(cfg.map, PathBuf::from("map.txt"));
        assert_eq!(cfg.strategy, Strategy::Peaks);
        assert_eq!(cfg.format, OutputFormat::Json);
    }

    #[test]
    fn solve_defaults() {
        let opts = Opts::try_parse_from(["skiing", "solve", "m"]).unwrap();
        let Command::Solve(args) = opts.command else {
            panic!("expected solve");
        };
        assert_eq!(RunConfig::from(&args), RunConfig::new("m"));
    }

    #[test]
    fn bad_strategy_rejected() {
        assert!(Opts::try_parse_from(["skiing", "solve", "m", "-s", "diagonal"]).is_err());
    }

    #[test]
    fn parse_generate_args() {
        let opts = Opts::try_parse_from([
            "skiing", "generate", "--rows", "3", "--cols", "4", "--seed", "9",
        ])
        .unwrap();
        let Command::Generate(args) = opts.command else {
            panic!("expected generate");
        };
        let cfg = GenerateConfig::from(&args);
        assert_eq!(cfg.rows, 3);
        assert_eq!(cfg.cols, 4);
        assert_eq!(cfg.max_elevation, 1500);
        assert_eq!(cfg.seed, Some(9));
    }
}
