use crate::Primitive;
use std::collections::HashMap;

/// F-measure over the two label maps, restricted to the ids present in both.
///
/// The counting scheme is the simplified two-outcome one: an agreeing point is
/// a true positive, a disagreeing point counts as both a false positive and a
/// false negative. Precision therefore always equals recall and the F1 value
/// collapses to the raw agreement rate; this is not the multi-class
/// confusion-matrix F-measure.
pub fn f_measure<T: Primitive>(predicted: &HashMap<usize, usize>, expected: &HashMap<usize, usize>) -> T {
    let mut true_pos = 0usize;
    let mut false_pos = 0usize;
    let mut false_neg = 0usize;
    for (id, pred) in predicted {
        if let Some(exp) = expected.get(id) {
            if pred == exp {
                true_pos += 1;
            } else {
                false_pos += 1;
                false_neg += 1;
            }
        }
    }

    if true_pos + false_pos == 0 {
        return T::zero();
    }
    let precision = true_pos as f64 / (true_pos + false_pos) as f64;
    let recall = true_pos as f64 / (true_pos + false_neg) as f64;
    if precision + recall == 0.0 {
        return T::zero();
    }
    T::from(2.0 * precision * recall / (precision + recall)).unwrap()
}
