//! Aggregate statistics over measured durations.

use crate::error::{ProbeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of one run's successful measurements, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: usize,
    pub min_ms: f64,
    pub max_ms: f64,
    pub median_ms: f64,
    pub mean_ms: f64,
}

impl Summary {
    /// Compute a summary, failing with [`ProbeError::NoSamples`] on empty input.
    pub fn from_durations(durations: &[f64]) -> Result<Self> {
        let (min_ms, max_ms) = min_max(durations).ok_or(ProbeError::NoSamples)?;
        let median_ms = median(durations).ok_or(ProbeError::NoSamples)?;
        let mean_ms = mean(durations).ok_or(ProbeError::NoSamples)?;

        Ok(Self {
            count: durations.len(),
            min_ms,
            max_ms,
            median_ms,
            mean_ms,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Min time: {:.4} ms", self.min_ms)?;
        writeln!(f, "Max time: {:.4} ms", self.max_ms)?;
        writeln!(f, "Median time: {:.4} ms", self.median_ms)?;
        write!(f, "Mean time: {:.4} ms", self.mean_ms)
    }
}

/// Smallest and largest value by linear scan.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = values.split_first()?;
    Some(rest.iter().fold((first, first), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    }))
}

/// Middle value of a sorted copy; the mean of the two middle values for even lengths.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
        assert_eq!(median(&[7.25]), Some(7.25));
    }

    #[test]
    fn test_median_does_not_reorder_input() {
        let values = [5.0, 1.0, 3.0];
        median(&values);
        assert_eq!(values, [5.0, 1.0, 3.0]);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[10.0, 20.0, 30.0]), Some(20.0));
        assert_eq!(mean(&[4.0]), Some(4.0));
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[3.5, -1.0, 9.25, 0.0]), Some((-1.0, 9.25)));
        assert_eq!(min_max(&[2.0]), Some((2.0, 2.0)));
    }

    #[test]
    fn test_empty_input_is_guarded() {
        assert_eq!(min_max(&[]), None);
        assert_eq!(median(&[]), None);
        assert_eq!(mean(&[]), None);
        assert!(matches!(
            Summary::from_durations(&[]),
            Err(ProbeError::NoSamples)
        ));
    }

    #[test]
    fn test_summary_display() {
        let summary = Summary::from_durations(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        let text = summary.to_string();

        assert!(text.contains("Min time: 1.0000 ms"));
        assert!(text.contains("Max time: 4.0000 ms"));
        assert!(text.contains("Median time: 2.5000 ms"));
        assert!(text.contains("Mean time: 2.5000 ms"));
    }
}
