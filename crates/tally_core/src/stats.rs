//! Descriptive statistics over a sample of reals.
//!
//! The standard deviation is the population version (divisor N), not the
//! sample version (divisor N - 1).

use serde::Serialize;

use crate::DomainError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub min: f64,
    pub median: f64,
    pub max: f64,
    pub sum: f64,
    pub mean: f64,
    pub std_dev: f64,
}

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

pub fn mean(values: &[f64]) -> Result<f64, DomainError> {
    non_empty(values)?;
    Ok(sum(values) / values.len() as f64)
}

/// Population standard deviation: `sqrt(sum((x - mean)^2) / N)`.
pub fn population_std_dev(values: &[f64]) -> Result<f64, DomainError> {
    let avg = mean(values)?;
    let squares: f64 = values
        .iter()
        .map(|x| {
            let diff = x - avg;
            diff * diff
        })
        .sum();
    Ok((squares / values.len() as f64).sqrt())
}

pub fn min(values: &[f64]) -> Result<f64, DomainError> {
    finite(values)?;
    Ok(values.iter().copied().fold(f64::INFINITY, f64::min))
}

pub fn max(values: &[f64]) -> Result<f64, DomainError> {
    finite(values)?;
    Ok(values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Middle value after sorting; the mean of the two middle values for an
/// even-length sample. The input is left untouched.
pub fn median(values: &[f64]) -> Result<f64, DomainError> {
    finite(values)?;
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        Ok(sorted[n / 2])
    } else {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

pub fn summarize(values: &[f64]) -> Result<Summary, DomainError> {
    finite(values)?;
    let summary = Summary {
        count: values.len(),
        min: min(values)?,
        median: median(values)?,
        max: max(values)?,
        sum: sum(values),
        mean: mean(values)?,
        std_dev: population_std_dev(values)?,
    };
    log::debug!("summarized {} values", summary.count);
    Ok(summary)
}

/// Parses one real number per line. Blank lines are skipped; line numbers in
/// errors are 1-based.
pub fn parse_samples(text: &str) -> Result<Vec<f64>, DomainError> {
    let mut out = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let s = raw.trim();
        if s.is_empty() {
            continue;
        }
        let x = s.parse::<f64>().map_err(|_| DomainError::InvalidNumber {
            line: idx + 1,
            text: s.to_string(),
        })?;
        out.push(x);
    }
    Ok(out)
}

fn non_empty(values: &[f64]) -> Result<(), DomainError> {
    if values.is_empty() {
        return Err(DomainError::EmptySample);
    }
    Ok(())
}

fn finite(values: &[f64]) -> Result<(), DomainError> {
    non_empty(values)?;
    match values.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(DomainError::NotFinite { index }),
        None => Ok(()),
    }
}
