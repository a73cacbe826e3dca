//! Cluster-quality scoring over a finished clustering run.
//!
//! All metrics are independent, read-only computations over the final cluster
//! set. The geometric ones (silhouette, Davies-Bouldin, Calinski-Harabasz)
//! need nothing else; the external ones (F-measure, Adjusted Rand Index)
//! additionally need a [`ClassLayout`] describing how the ground-truth classes
//! are laid out over the original point ordering.

mod ari;
mod calinski_harabasz;
mod davies_bouldin;
mod fmeasure;
mod labels;
mod silhouette;

pub use ari::adjusted_rand_index;
pub use calinski_harabasz::calinski_harabasz;
pub use davies_bouldin::davies_bouldin;
pub use fmeasure::f_measure;
pub use labels::{label_maps, ClassLayout};
pub use silhouette::silhouette;

use crate::errors::Result;
use crate::{Cluster, Point, Primitive};

/// All five validation scores of one run.
#[derive(Clone, Copy, Debug)]
pub struct Scores<T: Primitive> {
    pub silhouette: T,
    pub davies_bouldin: T,
    pub calinski_harabasz: T,
    pub f_measure: T,
    pub adjusted_rand_index: T,
}

/// The geometry-only subset, computable without a ground-truth layout.
#[derive(Clone, Copy, Debug)]
pub struct InternalScores<T: Primitive> {
    pub silhouette: T,
    pub davies_bouldin: T,
    pub calinski_harabasz: T,
}

/// Compute the three intrinsic metrics of a converged cluster set.
pub fn score_internal<T: Primitive>(clusters: &[Cluster<T>], points: &[Point<T>]) -> Result<InternalScores<T>> {
    Ok(InternalScores {
        silhouette: silhouette(clusters, points)?,
        davies_bouldin: davies_bouldin(clusters, points)?,
        calinski_harabasz: calinski_harabasz(clusters, points)?,
    })
}

/// Compute all five metrics of a converged cluster set against the given
/// ground-truth layout.
pub fn score_all<T: Primitive>(clusters: &[Cluster<T>], points: &[Point<T>], layout: &ClassLayout) -> Result<Scores<T>> {
    let internal = score_internal(clusters, points)?;
    let (predicted, expected) = label_maps(clusters, points, layout);
    Ok(Scores {
        silhouette: internal.silhouette,
        davies_bouldin: internal.davies_bouldin,
        calinski_harabasz: internal.calinski_harabasz,
        f_measure: f_measure(&predicted, &expected),
        adjusted_rand_index: adjusted_rand_index(&predicted, &expected),
    })
}
