use crate::args::{Cli, Command};
use crate::error::CliError;

pub(crate) mod common;
pub(crate) mod lines;
pub(crate) mod primes;
pub(crate) mod stats;
pub(crate) mod top;
pub(crate) mod wc;

use common::Printer;

pub(crate) fn run(cli: &Cli) -> Result<(), CliError> {
    let mut out = Printer::new(cli.json);
    match &cli.command {
        Command::Prime { numbers } => primes::check(numbers, &mut out)?,
        Command::Primes { upto, count } => primes::report(*upto, *count, &mut out)?,
        Command::Top { file, n } => top::run(file, *n, &mut out)?,
        Command::Stats { file } => stats::run(file, &mut out)?,
        Command::Wc { files } => wc::run(files, &mut out)?,
        Command::LongLines { files, max_len } => lines::run(files, *max_len, &mut out)?,
    }
    out.finish()
}
