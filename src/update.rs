use crate::{Cluster, Point, Primitive};
use rayon::prelude::*;

/// Recomputes every cluster's centroid as the componentwise mean of its
/// current members, then clears the member set (members are per-iteration
/// evidence, not persisted cluster state).
///
/// A cluster without members keeps its previous centroid untouched. Clusters
/// update independently, one rayon task each; no iteration-order dependency.
pub fn update_centroids<T: Primitive>(clusters: &mut [Cluster<T>], points: &[Point<T>]) {
    clusters.par_iter_mut().for_each(|cluster| {
        if cluster.is_empty() {
            cluster.clear_members();
            return;
        }

        let mut mean = vec![T::zero(); cluster.dims()];
        for &point_idx in cluster.members() {
            debug_assert_eq!(points[point_idx].dims(), mean.len());
            for (acc, v) in mean.iter_mut().zip(points[point_idx].attributes()) {
                *acc = *acc + *v;
            }
        }
        let count = T::from(cluster.members().len()).unwrap();
        for v in mean.iter_mut() {
            *v = *v / count;
        }

        cluster.set_centroid(mean);
        cluster.clear_members();
    });
}
