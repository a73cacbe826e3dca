use crate::distance::euclidean;
use crate::errors::{KMeansError, Result};
use crate::{inits, Cluster, Point, Primitive};
use rand::RngCore;
use rayon::prelude::*;
use tracing::debug;

/// Index of the nearest cluster by Euclidean distance to centroid.
///
/// Ties break towards the first cluster reaching the minimum in scan order
/// (strictly-less comparison), so repeated passes over the same state are
/// deterministic. `Iterator::min_by` keeps the last minimum and must not be
/// used here.
pub(crate) fn nearest_cluster<T: Primitive>(point: &Point<T>, clusters: &[Cluster<T>]) -> usize {
    let mut best_idx = 0;
    let mut best_dist = T::infinity();
    for (idx, cluster) in clusters.iter().enumerate() {
        let dist = euclidean(point.attributes(), cluster.centroid());
        if dist < best_dist {
            best_dist = dist;
            best_idx = idx;
        }
    }
    best_idx
}

fn validate_dims<T: Primitive>(clusters: &[Cluster<T>], points: &[Point<T>]) -> Result<()> {
    if clusters.is_empty() {
        return Err(KMeansError::InvalidClusterCount);
    }
    let dims = clusters[0].dims();
    for cluster in clusters {
        if cluster.dims() != dims {
            return Err(KMeansError::DimensionMismatch { left: dims, right: cluster.dims() });
        }
    }
    for point in points {
        if point.dims() != dims {
            return Err(KMeansError::DimensionMismatch { left: dims, right: point.dims() });
        }
    }
    Ok(())
}

/// One full assignment pass: clears every member set, then rebuilds the
/// partition by nearest centroid. Afterwards every point belongs to exactly
/// one cluster.
///
/// Each point resolves independently against the read-only centroids in its
/// own rayon task (static work-packet sizing, since rayon does not schedule
/// statically on its own); the per-task results are merged into the member
/// sets in a single sequential step, so no member list is ever shared between
/// tasks and the final partition is independent of execution order.
pub fn assign_points<T: Primitive>(clusters: &mut [Cluster<T>], points: &[Point<T>]) -> Result<()> {
    validate_dims(clusters, points)?;

    for cluster in clusters.iter_mut() {
        cluster.clear_members();
    }

    let snapshot: &[Cluster<T>] = clusters;
    let work_packet_size = (points.len() / rayon::current_num_threads()).max(1);
    let targets: Vec<usize> = points.par_iter()
        .with_min_len(work_packet_size)
        .map(|point| nearest_cluster(point, snapshot))
        .collect();

    for (point_idx, &cluster_idx) in targets.iter().enumerate() {
        clusters[cluster_idx].add_member(point_idx);
    }
    Ok(())
}

/// Assignment in recovery mode, used only during the warm-up phase right after
/// initialization: clusters that finish a pass without members are re-seeded
/// from the full point collection (keeping their id) and the entire pass is
/// repeated, until no cluster is left empty.
pub fn assign_points_reseeding<T: Primitive>(
    clusters: &mut [Cluster<T>],
    points: &[Point<T>],
    rng: &mut dyn RngCore,
) -> Result<()> {
    loop {
        assign_points(clusters, points)?;
        let mut reseeded = false;
        for cluster in clusters.iter_mut() {
            if cluster.is_empty() {
                debug!(cluster = cluster.id(), "re-seeding degenerate cluster");
                *cluster = inits::seed_cluster(cluster.id(), points, rng);
                reseeded = true;
            }
        }
        if !reseeded {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing::{points_from_rows, two_blobs};
    use rand::prelude::*;

    fn clusters_at(centroids: &[&[f64]]) -> Vec<Cluster<f64>> {
        centroids.iter().enumerate()
            .map(|(id, c)| Cluster::new(id, c.to_vec()))
            .collect()
    }

    #[test]
    fn every_point_lands_in_exactly_one_cluster() {
        let mut rng = StdRng::seed_from_u64(1);
        let rows: Vec<Vec<f64>> = (0..200)
            .map(|_| (0..3).map(|_| rng.gen_range(0.0, 10.0)).collect())
            .collect();
        let row_refs: Vec<&[f64]> = rows.iter().map(|r| r.as_slice()).collect();
        let points = points_from_rows(&row_refs);

        let mut clusters = clusters_at(&[&[1.0, 1.0, 1.0], &[5.0, 5.0, 5.0], &[9.0, 9.0, 9.0]]);
        assign_points(&mut clusters, &points).unwrap();

        let mut seen = vec![0usize; points.len()];
        for cluster in &clusters {
            for &idx in cluster.members() {
                seen[idx] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 1), "partition must be total and disjoint");
    }

    #[test]
    fn assignment_is_stable_across_repeated_passes() {
        let points = two_blobs();
        let mut a = clusters_at(&[&[0.5, 0.5], &[10.5, 10.5]]);
        let mut b = a.clone();
        assign_points(&mut a, &points).unwrap();
        assign_points(&mut b, &points).unwrap();
        for (ca, cb) in a.iter().zip(b.iter()) {
            assert_eq!(ca.members(), cb.members());
        }
    }

    #[test]
    fn equidistant_points_go_to_the_first_cluster_in_scan_order() {
        // Point at the exact midpoint of both centroids.
        let points = points_from_rows(&[&[5.0f64, 0.0]]);
        let mut clusters = clusters_at(&[&[0.0, 0.0], &[10.0, 0.0]]);
        assign_points(&mut clusters, &points).unwrap();
        assert_eq!(clusters[0].members(), &[0]);
        assert!(clusters[1].is_empty());
    }

    #[test]
    fn member_sets_are_rebuilt_from_empty() {
        let points = two_blobs();
        let mut clusters = clusters_at(&[&[0.5, 0.5], &[10.5, 10.5]]);
        assign_points(&mut clusters, &points).unwrap();
        // Move both centroids onto the second blob; stale members must vanish.
        clusters[0].set_centroid(vec![10.0, 10.0]);
        assign_points(&mut clusters, &points).unwrap();
        let total: usize = clusters.iter().map(|c| c.members().len()).sum();
        assert_eq!(total, points.len());
    }

    #[test]
    fn mismatched_point_dimensionality_is_an_error() {
        let points = points_from_rows(&[&[1.0f64, 2.0, 3.0]]);
        let mut clusters = clusters_at(&[&[0.0, 0.0]]);
        let res = assign_points(&mut clusters, &points);
        assert!(matches!(res, Err(KMeansError::DimensionMismatch { left: 2, right: 3 })));
    }

    #[test]
    fn reseeding_leaves_no_cluster_empty() {
        let points = two_blobs();
        // Second centroid far outside any point's reach: nothing gets assigned
        // to it until the recovery path replaces it.
        let mut clusters = clusters_at(&[&[5.0, 5.0], &[1000.0, 1000.0]]);
        let mut rng = StdRng::seed_from_u64(11);
        assign_points_reseeding(&mut clusters, &points, &mut rng).unwrap();
        assert!(clusters.iter().all(|c| !c.is_empty()));
        let total: usize = clusters.iter().map(|c| c.members().len()).sum();
        assert_eq!(total, points.len());
    }
}
