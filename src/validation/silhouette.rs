use crate::distance::euclidean;
use crate::errors::{KMeansError, Result};
use crate::{Cluster, Point, Primitive};
use rayon::prelude::*;

/// Mean silhouette coefficient over all assigned points.
///
/// Per point: `a` is the mean distance to the other members of its own
/// cluster, `b` the mean distance to the members of the nearest *other*
/// non-empty cluster (nearest by centroid, strict-less scan, the own cluster
/// excluded); the coefficient is `(b - a) / max(a, b)`. A point alone in its
/// cluster contributes 0, which is the guarded form of the otherwise undefined
/// division. Results lie in [-1, 1].
pub fn silhouette<T: Primitive>(clusters: &[Cluster<T>], points: &[Point<T>]) -> Result<T> {
    let populated = clusters.iter().filter(|c| !c.is_empty()).count();
    if populated < 2 {
        return Err(KMeansError::TooFewClusters { needed: 2, found: populated });
    }

    let per_cluster: Vec<(T, usize)> = clusters.par_iter().enumerate()
        .map(|(own, cluster)| {
            let mut sum = T::zero();
            for &point_idx in cluster.members() {
                sum = sum + coefficient(point_idx, own, clusters, points);
            }
            (sum, cluster.members().len())
        })
        .collect();

    let mut total = T::zero();
    let mut count = 0usize;
    for (sum, n) in per_cluster {
        total = total + sum;
        count += n;
    }
    Ok(total / T::from(count).unwrap())
}

fn coefficient<T: Primitive>(point_idx: usize, own: usize, clusters: &[Cluster<T>], points: &[Point<T>]) -> T {
    let point = &points[point_idx];
    let own_cluster = &clusters[own];
    if own_cluster.members().len() == 1 {
        return T::zero();
    }

    let mut intra = T::zero();
    for &other in own_cluster.members() {
        if other != point_idx {
            intra = intra + euclidean(point.attributes(), points[other].attributes());
        }
    }
    let a = intra / T::from(own_cluster.members().len() - 1).unwrap();

    // Nearest other cluster, re-running the centroid search without the own
    // cluster; empty clusters have no members to measure against and are
    // skipped. The caller guarantees a second non-empty cluster exists.
    let mut nearest = usize::MAX;
    let mut nearest_dist = T::infinity();
    for (ci, cluster) in clusters.iter().enumerate() {
        if ci == own || cluster.is_empty() {
            continue;
        }
        let dist = euclidean(point.attributes(), cluster.centroid());
        if dist < nearest_dist {
            nearest_dist = dist;
            nearest = ci;
        }
    }
    let neighbour = &clusters[nearest];

    let mut inter = T::zero();
    for &other in neighbour.members() {
        inter = inter + euclidean(point.attributes(), points[other].attributes());
    }
    let b = inter / T::from(neighbour.members().len()).unwrap();

    let denom = if a > b { a } else { b };
    if denom == T::zero() {
        return T::zero();
    }
    (b - a) / denom
}
