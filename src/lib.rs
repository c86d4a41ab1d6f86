pub mod clock;
pub mod config;
pub mod metrics;
pub mod schedule;
pub mod snapshot;
pub mod transform;

pub use clock::{Clock, FixedClock, SystemClock};
pub use metrics::{AttributeValue, Attributes, Gauge, Metered, MeteredSnapshot, RateWindow};
pub use transform::{ComponentTransformer, MeteredTransformer};
