use crate::errors::{KMeansError, Result};
use crate::{Cluster, Point, Primitive};
use rand::prelude::*;
use rand_distr::Normal;
use rayon::prelude::*;

/// Envelope statistics of one attribute dimension across the whole point
/// collection.
struct DimStats<T: Primitive> {
    min: T,
    max: T,
    std_dev: T,
}

fn fit_dimension<T: Primitive>(points: &[Point<T>], dim: usize) -> DimStats<T> {
    let mut min = points[0].attributes()[dim];
    let mut max = min;
    let mut sum = T::zero();
    for point in points {
        let v = point.attributes()[dim];
        if v < min {
            min = v;
        } else if v > max {
            max = v;
        }
        sum = sum + v;
    }
    let count = T::from(points.len()).unwrap();
    let mean = sum / count;

    let mut variance = T::zero();
    for point in points {
        let d = point.attributes()[dim] - mean;
        variance = variance + d * d;
    }
    variance = variance / count;

    DimStats { min, max, std_dev: variance.sqrt() }
}

/// One coordinate draw: a normal distribution centered on the midpoint of the
/// dimension's envelope with the dimension's standard deviation, re-sampled
/// until the draw lands inside [min, max]. Biased towards the center of the
/// data, but never outside its envelope.
fn sample_coordinate<T: Primitive, R: Rng + ?Sized>(stats: &DimStats<T>, rng: &mut R) -> T {
    let min = stats.min.to_f64().unwrap();
    let max = stats.max.to_f64().unwrap();
    let midpoint = (min + max) / 2.0;
    let normal = Normal::new(midpoint, stats.std_dev.to_f64().unwrap()).unwrap();
    loop {
        let draw = normal.sample(rng);
        if draw >= min && draw <= max {
            return T::from(draw).unwrap();
        }
    }
}

/// A single fresh cluster drawn from the full point collection, keeping the
/// given id. Also the re-seed primitive the warm-up recovery path uses.
pub(crate) fn seed_cluster<T: Primitive, R: Rng + ?Sized>(id: usize, points: &[Point<T>], rng: &mut R) -> Cluster<T> {
    let dims = points[0].dims();
    let centroid = (0..dims)
        .map(|dim| sample_coordinate(&fit_dimension(points, dim), rng))
        .collect();
    Cluster::new(id, centroid)
}

/// K clusters with ids `0..k` and empty member sets, each centroid drawn
/// per-dimension from the bounded distribution fitted to the points.
///
/// One rayon task per cluster; the shared generator never crosses a task
/// boundary because each task gets its own generator seeded from it up front,
/// which keeps seeded runs reproducible.
pub fn create_clusters<T: Primitive>(k: usize, points: &[Point<T>], rng: &mut dyn RngCore) -> Result<Vec<Cluster<T>>> {
    if k == 0 {
        return Err(KMeansError::InvalidClusterCount);
    }
    if points.is_empty() {
        return Err(KMeansError::EmptyPointSet);
    }

    let seeds: Vec<u64> = (0..k).map(|_| rng.next_u64()).collect();
    Ok(seeds.into_par_iter().enumerate()
        .map(|(id, seed)| {
            let mut task_rng = StdRng::seed_from_u64(seed);
            seed_cluster(id, points, &mut task_rng)
        })
        .collect())
}
