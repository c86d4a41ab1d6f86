pub mod types;
pub mod metered;

pub use types::*;
pub use metered::{Metered, MeteredSnapshot, RateWindow};
