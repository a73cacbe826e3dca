use thiserror::Error;

pub type Result<T> = std::result::Result<T, KMeansError>;

/// Failure taxonomy of a clustering run and its validation. All variants are
/// fatal to the run in progress; the only internally recovered condition is an
/// empty cluster during the warm-up pass, which is re-seeded instead of
/// reported.
#[derive(Debug, Error)]
pub enum KMeansError {
    /// Two attribute vectors that must be compared or differenced have
    /// different lengths (point vs. centroid, or centroid vs. snapshot).
    #[error("attribute vectors differ in dimensionality ({left} vs {right})")]
    DimensionMismatch { left: usize, right: usize },

    /// Convergence testing received cluster collections of different sizes.
    #[error("cluster snapshots differ in size ({current} current vs {previous} previous)")]
    CardinalityMismatch { current: usize, previous: usize },

    /// The point collection is empty, so its dimensionality is undefined.
    #[error("point collection is empty")]
    EmptyPointSet,

    /// A cluster count of zero was requested.
    #[error("cluster count must be at least 1")]
    InvalidClusterCount,

    /// An operation needs more clusters than the collection provides, e.g.
    /// a second cluster to compute a separation ratio against.
    #[error("operation needs at least {needed} clusters, found {found}")]
    TooFewClusters { needed: usize, found: usize },

    /// More points are required than the collection holds (a run with K > N
    /// could never fill every cluster).
    #[error("operation needs at least {needed} points, found {found}")]
    NotEnoughPoints { needed: usize, found: usize },

    /// The validation-constants lookup received a dataset it does not know.
    #[error("unknown dataset `{0}`")]
    UnknownDataset(String),

    /// A class layout with zero classes or a zero block size was requested.
    #[error("class layout must have a non-zero class count and block size")]
    InvalidClassLayout,
}
