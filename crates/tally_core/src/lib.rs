//! Number-theory and statistics primitives for tally.
//!
//! Everything here is pure; callers do the I/O.
//! - `primes` - trial-division primality, prime counting, lazy prime sequence
//! - `stats` - population standard deviation and a descriptive summary
//! - `DomainError` - the single error type of this crate

mod error;
pub mod primes;
pub mod stats;

pub use error::DomainError;
pub use primes::{
    PrimeExt, Primes, classify, count_primes_below, for_each_prime_below, is_prime, primes,
    primes_below,
};
pub use stats::{
    Summary, max, mean, median, min, parse_samples, population_std_dev, sum, summarize,
};
