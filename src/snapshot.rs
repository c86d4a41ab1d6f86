//! Snapshot files: captured meter rates keyed by metric name.
//!
//! ```json
//! { "http.requests": { "mean_rate": 1.0, "m1_rate": 2.0, "m5_rate": 3.0, "m15_rate": 4.0 } }
//! ```

use crate::clock::Clock;
use crate::metrics::{Attributes, Gauge, MeteredSnapshot, RateWindow};
use crate::transform::MeteredTransformer;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub type SnapshotFile = BTreeMap<String, MeteredSnapshot>;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn parse_snapshots(json: &str) -> Result<SnapshotFile, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_snapshots(path: impl AsRef<Path>) -> Result<SnapshotFile, SnapshotError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshots = parse_snapshots(&json)?;
    debug!(path = %path.display(), metrics = snapshots.len(), "loaded snapshots");
    Ok(snapshots)
}

/// Runs every snapshot through `transformer`, sharing `base` as the base
/// attributes. Output is ordered by metric name, then rate window.
pub fn export_gauges<C: Clock>(
    transformer: &MeteredTransformer<C>,
    snapshots: &SnapshotFile,
    base: &Attributes,
) -> Vec<Gauge> {
    let mut gauges: Vec<Gauge> = snapshots
        .iter()
        .flat_map(|(name, snapshot)| transformer.transform(name, snapshot, || base.clone()))
        .collect();

    gauges.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| window_of(a).cmp(&window_of(b))));
    gauges
}

fn window_of(gauge: &Gauge) -> Option<RateWindow> {
    gauge
        .attributes
        .get("rate")
        .and_then(|v| v.as_str())
        .and_then(RateWindow::from_code)
}
