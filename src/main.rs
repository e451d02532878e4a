mod logging;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use regex_afd_rs::{Config, Limits, Shell};

/// Compiles a regular expression into a DFA and validates strings with it
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Maximum number of symbols in the expression, end marker included
    #[arg(long, value_name = "N", default_value_t = Limits::default().max_positions)]
    max_positions: usize,

    /// Maximum number of DFA states
    #[arg(long, value_name = "N", default_value_t = Limits::default().max_states)]
    max_states: usize,

    /// Maximum number of distinct symbols
    #[arg(long, value_name = "N", default_value_t = Limits::default().max_alphabet)]
    max_alphabet: usize,

    /// Print the transition table once the DFA is built
    #[arg(short, long)]
    table: bool,

    /// Write a log to FILE
    #[arg(short, long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Log debugging information
    #[arg(short, long)]
    debug: bool,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Config {
            limits: Limits {
                max_positions: cli.max_positions,
                max_states: cli.max_states,
                max_alphabet: cli.max_alphabet,
            },
            show_table: cli.table,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log {
        logging::setup(path, cli.debug)?;
    }

    let config = Config::from(&cli);
    log::info!("starting with {:?}", config.limits);

    let stdin = io::stdin();
    Shell::new(stdin.lock(), io::stdout(), config).run()?;
    Ok(())
}
