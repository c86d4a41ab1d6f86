use serde::{Deserialize, Serialize};
use std::fmt;

/// An instrument that tracks an event rate over the four standard windows.
///
/// Rates are events per second. Decay and aggregation belong to whatever
/// produces them; implementors only report the current values.
pub trait Metered {
    fn mean_rate(&self) -> f64;
    fn one_minute_rate(&self) -> f64;
    fn five_minute_rate(&self) -> f64;
    fn fifteen_minute_rate(&self) -> f64;

    fn rate(&self, window: RateWindow) -> f64 {
        match window {
            RateWindow::Mean => self.mean_rate(),
            RateWindow::M1 => self.one_minute_rate(),
            RateWindow::M5 => self.five_minute_rate(),
            RateWindow::M15 => self.fifteen_minute_rate(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RateWindow {
    Mean,
    M1,
    M5,
    M15,
}

impl RateWindow {
    pub const ALL: [RateWindow; 4] = [
        RateWindow::Mean,
        RateWindow::M1,
        RateWindow::M5,
        RateWindow::M15,
    ];

    /// Value of the `rate` attribute on the emitted gauge.
    pub fn code(&self) -> &'static str {
        match self {
            RateWindow::Mean => "mean_rate",
            RateWindow::M1 => "m1_rate",
            RateWindow::M5 => "m5_rate",
            RateWindow::M15 => "m15_rate",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.code() == code)
    }
}

impl fmt::Display for RateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Rates captured from a meter at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeteredSnapshot {
    #[serde(alias = "meanRate")]
    pub mean_rate: f64,
    #[serde(alias = "oneMinuteRate", alias = "m1_rate")]
    pub one_minute_rate: f64,
    #[serde(alias = "fiveMinuteRate", alias = "m5_rate")]
    pub five_minute_rate: f64,
    #[serde(alias = "fifteenMinuteRate", alias = "m15_rate")]
    pub fifteen_minute_rate: f64,
}

impl MeteredSnapshot {
    pub fn new(
        mean_rate: f64,
        one_minute_rate: f64,
        five_minute_rate: f64,
        fifteen_minute_rate: f64,
    ) -> Self {
        Self {
            mean_rate,
            one_minute_rate,
            five_minute_rate,
            fifteen_minute_rate,
        }
    }
}

impl Metered for MeteredSnapshot {
    fn mean_rate(&self) -> f64 {
        self.mean_rate
    }

    fn one_minute_rate(&self) -> f64 {
        self.one_minute_rate
    }

    fn five_minute_rate(&self) -> f64 {
        self.five_minute_rate
    }

    fn fifteen_minute_rate(&self) -> f64 {
        self.fifteen_minute_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_codes_round_trip() {
        for window in RateWindow::ALL {
            assert_eq!(RateWindow::from_code(window.code()), Some(window));
        }
        assert_eq!(RateWindow::from_code("p99"), None);
    }

    #[test]
    fn test_rate_by_window() {
        let snapshot = MeteredSnapshot::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(snapshot.rate(RateWindow::Mean), 1.0);
        assert_eq!(snapshot.rate(RateWindow::M1), 2.0);
        assert_eq!(snapshot.rate(RateWindow::M5), 3.0);
        assert_eq!(snapshot.rate(RateWindow::M15), 4.0);
    }

    #[test]
    fn test_snapshot_accepts_camel_case() {
        let snapshot: MeteredSnapshot = serde_json::from_str(
            r#"{"meanRate": 0.5, "oneMinuteRate": 1.0,
                "fiveMinuteRate": 1.5, "fifteenMinuteRate": 2.0}"#,
        )
        .unwrap();
        assert_eq!(snapshot, MeteredSnapshot::new(0.5, 1.0, 1.5, 2.0));
    }
}
