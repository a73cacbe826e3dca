use crate::Primitive;
use std::collections::{BTreeMap, HashMap};

fn comb2(x: f64) -> f64 {
    x * (x - 1.0) / 2.0
}

/// Adjusted Rand Index between the predicted and expected label maps, computed
/// over the ids present in both.
///
/// Builds the contingency matrix of label co-occurrences, sums pairwise
/// agreements over its cells, rows and columns, and normalizes the raw index
/// against its expectation under random labelling. 1.0 for identical
/// labelings; at most 1.0 in general. When the adjustment denominator
/// vanishes (both labelings trivial) the index degenerates to 1.0.
pub fn adjusted_rand_index<T: Primitive>(predicted: &HashMap<usize, usize>, expected: &HashMap<usize, usize>) -> T {
    // Stable row/column interning of the distinct labels on each side.
    let mut rows: BTreeMap<usize, usize> = BTreeMap::new();
    let mut cols: BTreeMap<usize, usize> = BTreeMap::new();
    let mut pairs: Vec<(usize, usize)> = Vec::new();
    for (id, pred) in predicted {
        if let Some(exp) = expected.get(id) {
            let next_row = rows.len();
            let row = *rows.entry(*exp).or_insert(next_row);
            let next_col = cols.len();
            let col = *cols.entry(*pred).or_insert(next_col);
            pairs.push((row, col));
        }
    }
    if pairs.len() < 2 {
        return T::one();
    }

    let mut matrix = vec![vec![0usize; cols.len()]; rows.len()];
    for (row, col) in pairs.iter() {
        matrix[*row][*col] += 1;
    }

    let n = pairs.len() as f64;
    let index: f64 = matrix.iter()
        .flat_map(|row| row.iter())
        .map(|&cell| comb2(cell as f64))
        .sum();
    let row_pairs: f64 = matrix.iter()
        .map(|row| comb2(row.iter().sum::<usize>() as f64))
        .sum();
    let col_pairs: f64 = (0..cols.len())
        .map(|c| comb2(matrix.iter().map(|row| row[c]).sum::<usize>() as f64))
        .sum();

    let expected_index = row_pairs * col_pairs / comb2(n);
    let max_index = (row_pairs + col_pairs) / 2.0;
    let denom = max_index - expected_index;
    if denom == 0.0 {
        return T::one();
    }
    T::from((index - expected_index) / denom).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maps(pairs: &[(usize, usize, usize)]) -> (HashMap<usize, usize>, HashMap<usize, usize>) {
        let predicted = pairs.iter().map(|&(id, p, _)| (id, p)).collect();
        let expected = pairs.iter().map(|&(id, _, e)| (id, e)).collect();
        (predicted, expected)
    }

    #[test]
    fn identical_maps_score_exactly_one() {
        let (predicted, expected) = maps(&[(0, 0, 0), (1, 0, 0), (2, 1, 1), (3, 2, 2)]);
        let ari: f64 = adjusted_rand_index(&predicted, &expected);
        assert_eq!(ari, 1.0);
    }

    #[test]
    fn maximally_crossed_labelings_score_negative() {
        // Contingency matrix [[1,1],[1,1]]: no pairwise agreement at all.
        // By hand: index 0, row/col pair sums 2 each, C(4,2) = 6,
        // expected 2*2/6 = 2/3, max 2 → ARI = (0 - 2/3)/(2 - 2/3) = -0.5.
        let (predicted, expected) = maps(&[(0, 0, 0), (1, 1, 0), (2, 0, 1), (3, 1, 1)]);
        let ari: f64 = adjusted_rand_index(&predicted, &expected);
        assert_approx_eq!(ari, -0.5);
    }

    #[test]
    fn relabelled_but_identical_partitions_still_score_one() {
        // Same partition, different label values on each side.
        let (predicted, expected) = maps(&[(0, 7, 1), (1, 7, 1), (2, 9, 4), (3, 9, 4)]);
        let ari: f64 = adjusted_rand_index(&predicted, &expected);
        assert_eq!(ari, 1.0);
    }

    #[test]
    fn never_exceeds_one() {
        let (predicted, expected) = maps(&[(0, 0, 0), (1, 0, 0), (2, 1, 1), (3, 1, 0), (4, 1, 1)]);
        let ari: f64 = adjusted_rand_index(&predicted, &expected);
        assert!(ari <= 1.0);
    }
}
