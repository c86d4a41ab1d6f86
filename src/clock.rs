use chrono::Utc;

/// Source of the timestamp stamped on exported gauges.
pub trait Clock: Send + Sync {
    /// Current time in epoch milliseconds.
    fn time_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn time_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn time_millis(&self) -> i64 {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64 + Send + Sync,
{
    fn time_millis(&self) -> i64 {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(1000).time_millis(), 1000);
    }

    #[test]
    fn test_closure_clock() {
        let ticks = AtomicI64::new(0);
        let clock = || ticks.fetch_add(10, Ordering::SeqCst);
        assert_eq!(clock.time_millis(), 0);
        assert_eq!(clock.time_millis(), 10);
    }

    #[test]
    fn test_system_clock_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(SystemClock.time_millis() > 1_577_836_800_000);
    }
}
