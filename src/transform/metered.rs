use super::ComponentTransformer;
use crate::clock::{Clock, SystemClock};
use crate::config::RateUnit;
use crate::metrics::{Attributes, Gauge, Metered, RateWindow};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Emits one gauge per rate window for a metered instrument.
///
/// Rates arrive as events per second and are multiplied by `rate_factor`
/// before export, so a factor of 60 reports events per minute.
#[derive(Debug, Clone)]
pub struct MeteredTransformer<C = SystemClock> {
    clock: C,
    rate_factor: f64,
}

impl MeteredTransformer<SystemClock> {
    pub fn new(rate_factor: f64) -> Self {
        Self::with_clock(SystemClock, rate_factor)
    }

    pub fn for_unit(unit: RateUnit) -> Self {
        Self::new(unit.factor())
    }
}

impl<C: Clock> MeteredTransformer<C> {
    pub fn with_clock(clock: C, rate_factor: f64) -> Self {
        Self { clock, rate_factor }
    }

    pub fn rate_factor(&self) -> f64 {
        self.rate_factor
    }

    pub fn transform<M, F>(&self, name: &str, metered: &M, base_attributes: F) -> HashSet<Gauge>
    where
        M: Metered + ?Sized,
        F: FnOnce() -> Attributes,
    {
        // One instant for all four windows.
        let timestamp = self.clock.time_millis();
        let base = base_attributes();

        let gauges: HashSet<Gauge> = RateWindow::ALL
            .into_iter()
            .map(|window| {
                let value = self.convert_rate(metered.rate(window));
                if !value.is_finite() {
                    warn!(
                        metric = name,
                        rate = window.code(),
                        value,
                        "non-finite rate exported as-is"
                    );
                }
                make_gauge(name, timestamp, value, window, base.clone())
            })
            .collect();

        debug!(metric = name, timestamp, count = gauges.len(), "transformed metered rates");
        gauges
    }

    fn convert_rate(&self, rate: f64) -> f64 {
        self.rate_factor * rate
    }
}

impl<C: Clock, M: Metered + ?Sized> ComponentTransformer<M> for MeteredTransformer<C> {
    fn transform<F>(&self, name: &str, component: &M, base_attributes: F) -> HashSet<Gauge>
    where
        F: FnOnce() -> Attributes,
    {
        MeteredTransformer::transform(self, name, component, base_attributes)
    }
}

fn make_gauge(
    name: &str,
    timestamp: i64,
    value: f64,
    window: RateWindow,
    base: Attributes,
) -> Gauge {
    let attributes = base.put("rate", window.code()).put("groupingAs", "rates");
    Gauge::new(name, value, timestamp, attributes)
}
