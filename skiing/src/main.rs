//! skiing command-line entry point.

use std::io::{self, Write};

use clap::Parser;
use skiing_lib::config::{Command, Opts};
use skiing_lib::{GenerateConfig, RunConfig, run_generate, run_solve};
use tracing_subscriber::filter::LevelFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Opts::parse();
    init_logging(opts.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match opts.command {
        Command::Solve(args) => {
            if !run_solve(&RunConfig::from(&args), &mut out)? {
                eprintln!("no path exists: the map is empty");
                std::process::exit(1);
            }
        }
        Command::Generate(args) => run_generate(&GenerateConfig::from(&args), &mut out)?,
    }
    out.flush()?;
    Ok(())
}

/// Route `log` records to stderr at a level chosen by `-v` repetitions.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}
