use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use tally_text::DEFAULT_MAX_LINE_LEN;

#[derive(Parser)]
#[command(name = "tally", version, about = "Prime, word and number tallies")]
pub(crate) struct Cli {
    /// Print one JSON object per line instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long, global = true, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Report whether each integer is prime
    Prime {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },
    /// Report primality of 0..N, or count the primes below N
    Primes {
        #[arg(long, default_value_t = 30, allow_negative_numbers = true)]
        upto: i64,
        /// Only print how many primes are below N
        #[arg(long)]
        count: bool,
    },
    /// List the most frequent words of a text file
    Top {
        file: PathBuf,
        /// How many words to list
        #[arg(
            short = 'n',
            long = "top",
            default_value_t = 10,
            allow_negative_numbers = true
        )]
        n: i64,
    },
    /// Min, median, max, sum, mean and population std. dev. of a number file
    Stats { file: PathBuf },
    /// Line, word and character counts per file
    Wc {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Lines longer than a limit
    LongLines {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(long = "max", default_value_t = DEFAULT_MAX_LINE_LEN)]
        max_len: usize,
    },
}
