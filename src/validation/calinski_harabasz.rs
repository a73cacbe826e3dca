use crate::distance::euclidean;
use crate::errors::{KMeansError, Result};
use crate::{Cluster, Point, Primitive};

/// Calinski-Harabasz index: between-cluster dispersion over within-cluster
/// dispersion, each normalized by its degrees of freedom,
/// `(B / (K - 1)) / (W / (N - K))`. Higher is better.
pub fn calinski_harabasz<T: Primitive>(clusters: &[Cluster<T>], points: &[Point<T>]) -> Result<T> {
    let k = clusters.len();
    let n = points.len();
    if k < 2 {
        return Err(KMeansError::TooFewClusters { needed: 2, found: k });
    }
    if n <= k {
        return Err(KMeansError::NotEnoughPoints { needed: k + 1, found: n });
    }
    let dims = points[0].dims();
    for cluster in clusters {
        if cluster.dims() != dims {
            return Err(KMeansError::DimensionMismatch { left: dims, right: cluster.dims() });
        }
    }

    let mut global = vec![T::zero(); dims];
    for point in points {
        for (acc, v) in global.iter_mut().zip(point.attributes()) {
            *acc = *acc + *v;
        }
    }
    let nf = T::from(n).unwrap();
    for v in global.iter_mut() {
        *v = *v / nf;
    }

    let mut between = T::zero();
    for cluster in clusters {
        let d = euclidean(cluster.centroid(), &global);
        between = between + T::from(cluster.members().len()).unwrap() * d * d;
    }

    let mut within = T::zero();
    for cluster in clusters {
        for &idx in cluster.members() {
            let d = euclidean(points[idx].attributes(), cluster.centroid());
            within = within + d * d;
        }
    }

    let b = between / T::from(k - 1).unwrap();
    let w = within / T::from(n - k).unwrap();
    Ok(b / w)
}
