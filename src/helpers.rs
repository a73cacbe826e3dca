#[cfg(test)]
macro_rules! assert_approx_eq {
	($left: expr, $right: expr, $tol: expr) => ({
		match ($left, $right, $tol) {
			(left_val , right_val, tol_val) => {
				let delta = (left_val - right_val).abs();
				if !(delta < tol_val) {
					panic!(
						"assertion failed: `(left ≈ right)` \
						(left: `{}`, right: `{}`) \
						with ∆={:1.1e} (allowed ∆={:e})",
						left_val , right_val, delta, tol_val
					)
				}
			}
		}
	});
	($left: expr, $right: expr) => (assert_approx_eq!(($left), ($right), 1e-12))
}

#[cfg(test)]
pub(crate) mod testing {
	use crate::{Point, Primitive};

	/// Points with sequential ids from row slices, for hand-built fixtures.
	pub fn points_from_rows<T: Primitive>(rows: &[&[T]]) -> Vec<Point<T>> {
		rows.iter().enumerate()
			.map(|(id, row)| Point::new(id, row.to_vec()))
			.collect()
	}

	/// Two well-separated three-point groups in the plane.
	pub fn two_blobs() -> Vec<Point<f64>> {
		points_from_rows(&[
			&[0.0, 0.0], &[0.0, 1.0], &[1.0, 0.0],
			&[10.0, 10.0], &[10.0, 11.0], &[11.0, 10.0],
		])
	}
}
