use crate::errors::{KMeansError, Result};
use crate::{Cluster, Primitive};
use rayon::prelude::*;

/// Tolerance used by [`converged_default`]. The clustering driver runs its
/// loop with the (coarser) tolerance from its configuration instead.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// True iff every coordinate of every centroid moved by at most `tolerance`
/// between the two snapshots.
///
/// Snapshots are compared positionally; cluster identity across them must be
/// stable (clusters are never reordered during a run). The scan is partitioned
/// over index ranges and evaluated concurrently, bailing out on the first
/// moved coordinate; the partition granularity never affects the result.
pub fn converged<T: Primitive>(current: &[Cluster<T>], previous: &[Cluster<T>], tolerance: T) -> Result<bool> {
    if current.len() != previous.len() {
        return Err(KMeansError::CardinalityMismatch {
            current: current.len(),
            previous: previous.len(),
        });
    }
    for (cur, prev) in current.iter().zip(previous.iter()) {
        if cur.dims() != prev.dims() {
            return Err(KMeansError::DimensionMismatch { left: cur.dims(), right: prev.dims() });
        }
    }

    let work_packet_size = (current.len() / rayon::current_num_threads()).max(1);
    let moved = (0..current.len()).into_par_iter()
        .with_min_len(work_packet_size)
        .any(|i| {
            current[i].centroid().iter()
                .zip(previous[i].centroid().iter())
                .any(|(c, p)| (*c - *p).abs() > tolerance)
        });
    Ok(!moved)
}

/// [`converged`] under [`DEFAULT_TOLERANCE`].
pub fn converged_default<T: Primitive>(current: &[Cluster<T>], previous: &[Cluster<T>]) -> Result<bool> {
    converged(current, previous, T::from(DEFAULT_TOLERANCE).unwrap())
}
