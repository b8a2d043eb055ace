//! Trial-division primality.
//!
//! Counting uses the "strictly less than n" convention: the scan starts at 2
//! and stops before n, so `count_primes_below(10)` sees 2, 3, 5 and 7.

use std::iter::FusedIterator;

/// Returns true if `n` is prime. Total over `i64`; anything below 2 is not prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    // n > 2 and odd. The loop exits once candidate^2 passes n <= i64::MAX,
    // so candidate^2 always fits in u64.
    let n = n as u64;
    let mut candidate: u64 = 3;
    while candidate * candidate <= n {
        if n % candidate == 0 {
            return false;
        }
        candidate += 2;
    }
    true
}

/// Number of primes in `[2, n)`.
pub fn count_primes_below(n: i64) -> u64 {
    let count = (2..n.max(2)).filter(|&i| is_prime(i)).count() as u64;
    log::trace!("count_primes_below({n}) = {count}");
    count
}

/// The ascending sequence of all primes, starting from 2.
pub fn primes() -> Primes {
    Primes::new()
}

/// The primes strictly below `n`, in ascending order.
pub fn primes_below(n: i64) -> impl Iterator<Item = i64> {
    primes().take_while(move |&p| p < n)
}

/// Calls `f` once per prime strictly below `n`, smallest first.
pub fn for_each_prime_below<F>(n: i64, mut f: F)
where
    F: FnMut(i64),
{
    for p in primes_below(n) {
        f(p);
    }
}

/// Pairs each value of `range` with its primality, lazily.
pub fn classify<I>(range: I) -> impl Iterator<Item = (i64, bool)>
where
    I: IntoIterator<Item = i64>,
{
    range.into_iter().map(|n| (n, is_prime(n)))
}

/// Lazy prime sequence.
///
/// The sequence never restarts; build a new one with [`primes`] to start over.
/// It ends only when the next odd candidate would overflow `i64`.
#[derive(Clone, Debug)]
pub struct Primes {
    next: Option<i64>,
}

impl Primes {
    pub fn new() -> Self {
        Self { next: Some(2) }
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Primes {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            let candidate = self.next?;
            self.next = if candidate == 2 {
                Some(3)
            } else {
                candidate.checked_add(2)
            };
            if is_prime(candidate) {
                return Some(candidate);
            }
        }
    }
}

impl FusedIterator for Primes {}

/// Method-call form of the free functions, for integer receivers.
#[allow(clippy::wrong_self_convention)]
pub trait PrimeExt {
    fn is_prime(self) -> bool;
    fn count_primes_below(self) -> u64;
}

impl PrimeExt for i64 {
    fn is_prime(self) -> bool {
        is_prime(self)
    }

    fn count_primes_below(self) -> u64 {
        count_primes_below(self)
    }
}
