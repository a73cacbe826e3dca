use crate::Primitive;

/// Euclidean distance between two equal-length attribute vectors: squared
/// componentwise differences are accumulated, then rooted.
///
/// Equal dimensionality is a caller obligation. The engines validate it once
/// at their boundary; this hot inner function only debug-asserts it.
#[inline(always)]
pub fn euclidean<T: Primitive>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    a.iter().cloned().zip(b.iter().cloned())
        .map(|(av, bv)| av - bv)
        .map(|d| d * d)
        .sum::<T>()
        .sqrt()
}
