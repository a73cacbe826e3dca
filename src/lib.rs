//! # kmeans-eval - API documentation
//!
//! kmeans-eval is a rust library for k-means clustering and the validation of
//! its results.
//!
//! ## Design target
//! The crate covers the full loop of a clustering experiment: partition a
//! fixed point collection into K clusters by iterative centroid refinement,
//! then score the partition: against intrinsic cluster-quality criteria
//! (silhouette, Davies-Bouldin, Calinski-Harabasz) and, when the dataset
//! carries block-ordered ground-truth classes, against external ones
//! (F-measure, Adjusted Rand Index).
//!
//! Every phase of a run (centroid initialization, nearest-centroid
//! assignment, centroid recomputation, convergence testing) executes as a
//! fork-join set of rayon tasks; per-task outputs are either disjoint or
//! merged in one sequential step, so the final state is deterministic with
//! respect to a seeded random generator despite the concurrency.
//!
//! ## Centroid initialization
//! Initial centroids are drawn per dimension from a normal distribution
//! fitted to that dimension (centered on the envelope midpoint, spread by the
//! sample's standard deviation) and re-sampled until they land inside the
//! envelope: biased towards the center of the data, never outside it.
//! Clusters that come out of the first assignment pass empty are re-seeded
//! the same way until none is, but only during this warm-up phase; a cluster
//! that empties later in the run simply freezes its centroid.
//!
//! ## Supported primitive types
//! - [`f32`]
//! - [`f64`]
//!
//! ## Example
//! ```rust
//! use kmeans_eval::{KMeans, KMeansConfig};
//! use kmeans_eval::validation::{score_all, ClassLayout};
//!
//! fn main() {
//!     // Two tight groups of three points each, laid out as two
//!     // contiguous class blocks.
//!     let samples = vec![
//!         0.0f64, 0.0,   0.0, 1.0,   1.0, 0.0,
//!         10.0, 10.0,   10.0, 11.0,   11.0, 10.0,
//!     ];
//!
//!     let kmean = KMeans::from_samples(samples, 6, 2).unwrap();
//!     let clusters = kmean.kmeans_lloyd(2, &KMeansConfig::default()).unwrap();
//!
//!     let layout = ClassLayout::new(2, 3).unwrap();
//!     let scores = score_all(&clusters, kmean.points(), &layout).unwrap();
//!     println!("silhouette: {:.3}", scores.silhouette);
//!     println!("f-measure:  {:.3}", scores.f_measure);
//! }
//! ```
//!
//! ## Example (using the status event callbacks)
//! ```rust
//! use kmeans_eval::{KMeans, KMeansConfig};
//!
//! fn main() {
//!     let samples = vec![
//!         0.0f64, 0.0,   0.0, 1.0,   1.0, 0.0,
//!         10.0, 10.0,   10.0, 11.0,   11.0, 10.0,
//!     ];
//!
//!     let conf = KMeansConfig::build()
//!         .init_done(&|_| println!("Initialization completed."))
//!         .iteration_done(&|_, nr, stable|
//!             println!("Iteration {} - converged: {}", nr, stable))
//!         .build();
//!
//!     let kmean = KMeans::from_samples(samples, 6, 2).unwrap();
//!     let clusters = kmean.kmeans_lloyd(2, &conf).unwrap();
//!     println!("{} clusters", clusters.len());
//! }
//! ```
//!
//! ## Short API-Overview
//! Entry-point is the [`KMeans`] struct, generic over the underlying
//! primitive type. An instance takes ownership of the point collection and
//! validates it once; [`KMeans::kmeans_lloyd`] then runs the clustering state
//! machine as often as wanted, each run configured by a [`KMeansConfig`]
//! (random generator, tolerance, iteration cap, status callbacks) and
//! returning the converged [`Cluster`] set with final membership. The
//! [`validation`] module scores such a cluster set.

#[macro_use] mod helpers;
mod api;
mod assign;
mod cluster;
mod convergence;
mod distance;
mod errors;
mod inits;
mod lloyd;
mod point;
mod primitive;
mod update;
pub mod validation;

pub use api::{InitDoneCallbackFn, IterationDoneCallbackFn, KMeans, KMeansConfig, KMeansConfigBuilder};
pub use assign::{assign_points, assign_points_reseeding};
pub use cluster::Cluster;
pub use convergence::{converged, converged_default, DEFAULT_TOLERANCE};
pub use distance::euclidean;
pub use errors::{KMeansError, Result};
pub use inits::create_clusters;
pub use point::Point;
pub use primitive::Primitive;
pub use update::update_centroids;
