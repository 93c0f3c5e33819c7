//! Roshambo Binary
//!
//! Plays rock, paper, scissors against the computer in the terminal.
//!
//! Options: --seed, --lenient, -v, --log-dir

use clap::Parser;
use roshambo::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed the computer's throws for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
    /// Read answers as a leading integer: skip leading whitespace and an
    /// optional sign, then take the digits. Anything after the digits is
    /// ignored, so "2abc" is accepted as 2 and "3.9" as 3 instead of being
    /// rejected. Exponents are not read: "2e1" is 2, not 20
    #[arg(long)]
    lenient: bool,
    /// Log to stderr: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Also write a debug log file into this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Args {
    fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
    fn parse_mode(&self) -> Parse {
        match self.lenient {
            true => Parse::Lenient,
            false => Parse::Strict,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.level(), args.log_dir.as_deref())?;
    let console = Console::new(args.seed);
    Session::with_parse(console, args.parse_mode()).play()?;
    Ok(())
}
