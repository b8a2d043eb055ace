use serde_json::json;
use tally_core::{classify, count_primes_below, is_prime};

use crate::commands::common::Printer;
use crate::error::CliError;

pub(crate) fn check(numbers: &[i64], out: &mut Printer) -> Result<(), CliError> {
    for &n in numbers {
        emit_one(n, is_prime(n), out)?;
    }
    Ok(())
}

/// Streams one line per value so huge ranges start printing at once.
pub(crate) fn report(upto: i64, count_only: bool, out: &mut Printer) -> Result<(), CliError> {
    if count_only {
        let count = count_primes_below(upto);
        return out.emit(
            json!({ "below": upto, "count": count }),
            format_args!("primes below {upto}: {count}"),
        );
    }
    for (n, prime) in classify(0..upto.max(0)) {
        emit_one(n, prime, out)?;
    }
    Ok(())
}

fn emit_one(n: i64, prime: bool, out: &mut Printer) -> Result<(), CliError> {
    out.emit(
        json!({ "n": n, "prime": prime }),
        format_args!("{n}: {prime}"),
    )
}
