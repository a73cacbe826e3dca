use crate::errors::{KMeansError, Result};
use crate::{lloyd, Cluster, Point, Primitive};
use rand::prelude::*;
use std::cell::RefCell;

pub type InitDoneCallbackFn<'a, T> = &'a dyn Fn(&[Cluster<T>]);
pub type IterationDoneCallbackFn<'a, T> = &'a dyn Fn(&[Cluster<T>], usize, bool);

/// Configuration of a clustering run: the random number generator to use, the
/// convergence tolerance, an optional iteration cap, and a couple of callbacks
/// that can be set to observe a running calculation.
///
/// For a more detailed description of the options, have a look at
/// [`KMeansConfigBuilder`].
pub struct KMeansConfig<'a, T: Primitive> {
    /// Callback that is called when the centroid initialization finished.
    pub(crate) init_done: InitDoneCallbackFn<'a, T>,
    /// Callback that is called after each loop iteration, with the iteration
    /// number and whether the convergence test held.
    pub(crate) iteration_done: IterationDoneCallbackFn<'a, T>,
    /// Random number generator driving initialization and warm-up re-seeding.
    pub(crate) rnd: Box<RefCell<dyn RngCore>>,
    /// Per-coordinate centroid movement below which a run counts as stable.
    pub(crate) tolerance: T,
    /// Optional safety cap on loop iterations. `None` reproduces the original
    /// tolerance-only termination.
    pub(crate) max_iterations: Option<usize>,
}

impl<'a, T: Primitive> Default for KMeansConfig<'a, T> {
    fn default() -> Self {
        Self {
            init_done: &|_| {},
            iteration_done: &|_, _, _| {},
            rnd: Box::new(RefCell::new(rand::thread_rng())),
            tolerance: T::from(1e-3).unwrap(),
            max_iterations: None,
        }
    }
}

impl<'a, T: Primitive> KMeansConfig<'a, T> {
    /// Use the [`KMeansConfigBuilder`] to build a [`KMeansConfig`] instance.
    pub fn build() -> KMeansConfigBuilder<'a, T> {
        KMeansConfigBuilder { config: KMeansConfig::default() }
    }
}

impl<'a, T: Primitive> std::fmt::Debug for KMeansConfig<'a, T> {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { Ok(()) }
}

pub struct KMeansConfigBuilder<'a, T: Primitive> {
    config: KMeansConfig<'a, T>,
}

impl<'a, T: Primitive> KMeansConfigBuilder<'a, T> {
    /// Set the callback called after centroid initialization, before the
    /// warm-up assignment starts.
    pub fn init_done(mut self, init_done: InitDoneCallbackFn<'a, T>) -> Self {
        self.config.init_done = init_done; self
    }
    /// Set the callback called after each iteration of a running calculation.
    pub fn iteration_done(mut self, iteration_done: IterationDoneCallbackFn<'a, T>) -> Self {
        self.config.iteration_done = iteration_done; self
    }
    /// Set the random number generator to use. Pass a seeded generator for
    /// deterministically repeatable runs.
    pub fn random_generator<R: RngCore + 'static>(mut self, rnd: R) -> Self {
        self.config.rnd = Box::new(RefCell::new(rnd)); self
    }
    /// Set the convergence tolerance the iteration loop tests under.
    /// ## Default
    /// `1e-3`
    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.config.tolerance = tolerance; self
    }
    /// Cap the number of loop iterations. Without a cap, termination depends
    /// solely on the tolerance test, as in the original algorithm.
    /// ## Default
    /// `None`
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = Some(max_iterations); self
    }
    /// Return the internally built configuration structure.
    pub fn build(self) -> KMeansConfig<'a, T> { self.config }
}

/// Entrypoint of this crate's API-surface.
///
/// Create an instance with the points to operate on; the primitive type of the
/// attribute data is the type used internally for all calculations and
/// returned scores. The instance itself is immutable, so multiple runs can be
/// calculated from it (each run is internally parallelized already).
///
/// ## Example
/// ```rust
/// use kmeans_eval::{KMeans, KMeansConfig};
///
/// fn main() {
///     // Two tight groups of three points each
///     let samples = vec![
///         0.0f64, 0.0,   0.0, 1.0,   1.0, 0.0,
///         10.0, 10.0,   10.0, 11.0,   11.0, 10.0,
///     ];
///
///     let kmean = KMeans::from_samples(samples, 6, 2).unwrap();
///     let clusters = kmean.kmeans_lloyd(2, &KMeansConfig::default()).unwrap();
///
///     for cluster in &clusters {
///         println!("cluster {}: centroid {:?}, {} members",
///             cluster.id(), cluster.centroid(), cluster.members().len());
///     }
/// }
/// ```
pub struct KMeans<T: Primitive> {
    points: Vec<Point<T>>,
    dims: usize,
}

impl<T: Primitive> KMeans<T> {
    /// Create a new instance over an already constructed point collection.
    ///
    /// Fails with [`KMeansError::EmptyPointSet`] on an empty collection and
    /// with [`KMeansError::DimensionMismatch`] when the points do not share
    /// one dimensionality; the engines rely on both being validated here.
    pub fn new(points: Vec<Point<T>>) -> Result<Self> {
        let dims = match points.first() {
            Some(point) => point.dims(),
            None => return Err(KMeansError::EmptyPointSet),
        };
        for point in &points {
            if point.dims() != dims {
                return Err(KMeansError::DimensionMismatch { left: dims, right: point.dims() });
            }
        }
        Ok(Self { points, dims })
    }

    /// Convenience constructor over a flat row-major sample buffer
    /// `[<sample0>,<sample1>,...]`, assigning sequential point ids.
    ///
    /// ## Arguments
    /// - **samples**: row-major attribute values, `sample_cnt * sample_dims` long
    /// - **sample_cnt**: amount of samples contained in **samples**
    /// - **sample_dims**: amount of dimensions each sample has
    pub fn from_samples(samples: Vec<T>, sample_cnt: usize, sample_dims: usize) -> Result<Self> {
        assert!(samples.len() == sample_cnt * sample_dims);
        let points = samples.chunks_exact(sample_dims)
            .enumerate()
            .map(|(id, row)| Point::new(id, row.to_vec()))
            .collect();
        Self::new(points)
    }

    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Run the full clustering state machine over this instance's points and
    /// return the converged clusters with their final membership.
    ///
    /// ## Arguments
    /// - **k**: amount of clusters to search for (1 ≤ k ≤ point count)
    /// - **config**: [`KMeansConfig`] instance with the run's options
    pub fn kmeans_lloyd<'a>(&self, k: usize, config: &KMeansConfig<'a, T>) -> Result<Vec<Cluster<T>>> {
        if k == 0 {
            return Err(KMeansError::InvalidClusterCount);
        }
        lloyd::Lloyd::calculate(self, k, config)
    }
}
