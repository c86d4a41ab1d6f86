pub mod metered;

use crate::metrics::{Attributes, Gauge};
use std::collections::HashSet;

pub use metered::MeteredTransformer;

/// Turns one registered instrument into the gauges exported for it.
pub trait ComponentTransformer<T: ?Sized> {
    fn transform<F>(&self, name: &str, component: &T, base_attributes: F) -> HashSet<Gauge>
    where
        F: FnOnce() -> Attributes;
}
