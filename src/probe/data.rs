//! Data structures for probe measurements.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One recorded probe measurement.
///
/// Field names are the document schema used by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Public address of the probing node
    pub ip: String,
    /// Round-trip time in milliseconds, microsecond precision
    pub duration_ms: f64,
    /// Unix timestamp (seconds) when the sample was recorded
    pub timestamp: i64,
    /// Tag of the implementation that produced the sample
    pub lang: String,
}

impl Sample {
    /// Build a sample stamped with the current time.
    pub fn new(ip: impl Into<String>, elapsed: Duration, lang: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            duration_ms: duration_to_ms(elapsed),
            timestamp: chrono::Utc::now().timestamp(),
            lang: lang.into(),
        }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IP={}, Duration={:.4} ms, Timestamp={}, Lang={}",
            self.ip, self.duration_ms, self.timestamp, self.lang
        )
    }
}

/// Convert an elapsed duration to milliseconds, truncated to whole microseconds.
pub fn duration_to_ms(elapsed: Duration) -> f64 {
    elapsed.as_micros() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_truncates_to_microseconds() {
        assert_eq!(duration_to_ms(Duration::from_nanos(1_234_567)), 1.234);
        assert_eq!(duration_to_ms(Duration::from_millis(250)), 250.0);
        assert_eq!(duration_to_ms(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_sample_display() {
        let sample = Sample {
            ip: "203.0.113.7".to_string(),
            duration_ms: 12.5,
            timestamp: 1_700_000_000,
            lang: "rust".to_string(),
        };
        assert_eq!(
            sample.to_string(),
            "IP=203.0.113.7, Duration=12.5000 ms, Timestamp=1700000000, Lang=rust"
        );
    }

    #[test]
    fn test_new_sample_is_timestamped_now() {
        let before = chrono::Utc::now().timestamp();
        let sample = Sample::new("::1", Duration::from_micros(1500), "rust");
        let after = chrono::Utc::now().timestamp();

        assert_eq!(sample.duration_ms, 1.5);
        assert!(sample.timestamp >= before && sample.timestamp <= after);
    }
}
