use num::{Float, NumCast, Zero};
use rand::distributions::uniform::SampleUniform;
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// Floating-point abstraction every calculation in this crate is generic over.
/// The attribute data's primitive decides the precision of all derived values
/// (centroids, distances, validation scores).
pub trait Primitive: Add + AddAssign + Sum + Sub + Zero + Float + NumCast + SampleUniform
                + PartialOrd + Copy + Default + Display + Debug + Sync + Send + 'static {}
impl Primitive for f32 {}
impl Primitive for f64 {}
