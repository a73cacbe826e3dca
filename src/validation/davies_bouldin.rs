use crate::distance::euclidean;
use crate::errors::{KMeansError, Result};
use crate::{Cluster, Point, Primitive};
use rayon::prelude::*;

/// Davies-Bouldin index: per cluster the worst (largest) ratio of summed
/// intra-cluster scatter to centroid separation over all partner clusters,
/// averaged over clusters. Lower is better; non-negative for any cluster set
/// with at least two clusters and mutually distinct centroids.
pub fn davies_bouldin<T: Primitive>(clusters: &[Cluster<T>], points: &[Point<T>]) -> Result<T> {
    if clusters.len() < 2 {
        return Err(KMeansError::TooFewClusters { needed: 2, found: clusters.len() });
    }

    // Intra-cluster scatter: mean member distance to the own centroid.
    let scatters: Vec<T> = clusters.par_iter()
        .map(|cluster| {
            if cluster.is_empty() {
                return T::zero();
            }
            let mut sum = T::zero();
            for &idx in cluster.members() {
                sum = sum + euclidean(points[idx].attributes(), cluster.centroid());
            }
            sum / T::from(cluster.members().len()).unwrap()
        })
        .collect();

    let mut total = T::zero();
    for (i, ci) in clusters.iter().enumerate() {
        let mut worst = T::zero();
        for (j, cj) in clusters.iter().enumerate() {
            if i == j {
                continue;
            }
            let separation = euclidean(ci.centroid(), cj.centroid());
            let ratio = (scatters[i] + scatters[j]) / separation;
            if ratio > worst {
                worst = ratio;
            }
        }
        total = total + worst;
    }
    Ok(total / T::from(clusters.len()).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::testing::{points_from_rows, two_blobs};

    #[test]
    fn well_separated_tight_groups_score_low_but_non_negative() {
        let points = two_blobs();
        let mut a = Cluster::new(0, vec![1.0 / 3.0, 1.0 / 3.0]);
        let mut b = Cluster::new(1, vec![31.0 / 3.0, 31.0 / 3.0]);
        for idx in 0..3 {
            a.add_member(idx);
        }
        for idx in 3..6 {
            b.add_member(idx);
        }
        let score = davies_bouldin(&[a, b], &points).unwrap();
        assert!(score >= 0.0);
        assert!(score < 0.2, "tight distant groups should score low, was {}", score);
    }

    #[test]
    fn overlapping_groups_score_worse_than_separated_ones() {
        let separated = {
            let points = two_blobs();
            let mut a = Cluster::new(0, vec![1.0 / 3.0, 1.0 / 3.0]);
            let mut b = Cluster::new(1, vec![31.0 / 3.0, 31.0 / 3.0]);
            for idx in 0..3 { a.add_member(idx); }
            for idx in 3..6 { b.add_member(idx); }
            davies_bouldin(&[a, b], &points).unwrap()
        };
        let overlapping = {
            let points = points_from_rows(&[
                &[0.0f64, 0.0], &[2.0, 0.0], &[1.0, 1.0],
                &[1.0, 0.0], &[3.0, 0.0], &[2.0, 1.0],
            ]);
            let mut a = Cluster::new(0, vec![1.0, 1.0 / 3.0]);
            let mut b = Cluster::new(1, vec![2.0, 1.0 / 3.0]);
            for idx in 0..3 { a.add_member(idx); }
            for idx in 3..6 { b.add_member(idx); }
            davies_bouldin(&[a, b], &points).unwrap()
        };
        assert!(overlapping > separated);
    }

    #[test]
    fn a_single_cluster_has_no_partner_to_compare_against() {
        let points = two_blobs();
        let res = davies_bouldin(&[Cluster::new(0, vec![0.0, 0.0])], &points);
        assert!(matches!(res, Err(KMeansError::TooFewClusters { needed: 2, found: 1 })));
    }
}
