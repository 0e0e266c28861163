//! Simple Additive Weighting: each column is scaled by its maximum, then every alternative scores
//! the weighted sum of its scaled values.

use crate::{DecisionMatrix, Normalized, WeightVector};

/// Intermediate and final values of a SAW run, row-aligned with the input matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation<const N: usize> {
    pub column_max: [f64; N],
    /// `R[i][j] = M[i][j] / column_max[j]`
    pub normalized: Vec<[Normalized; N]>,
    pub preference: Vec<Normalized>,
    /// Columns whose maximum is 0. They contribute nothing to any alternative's score.
    pub degenerate_columns: Vec<usize>,
}

pub fn evaluate<const N: usize>(
    matrix: &DecisionMatrix<N>,
    weights: &WeightVector<N>,
) -> Evaluation<N> {
    if matrix.is_empty() {
        return Evaluation {
            column_max: [0.0; N],
            normalized: Vec::new(),
            preference: Vec::new(),
            degenerate_columns: Vec::new(),
        };
    }

    let column_max = matrix.column_max();
    let degenerate_columns: Vec<usize> = (0..N).filter(|&j| column_max[j] == 0.0).collect();

    let normalized: Vec<[Normalized; N]> = matrix
        .rows()
        .iter()
        .map(|row| {
            std::array::from_fn(|j| match column_max[j] {
                max if max == 0.0 => Normalized::ZERO,
                max => Normalized::saturating(row[j].as_f64() / max),
            })
        })
        .collect();

    let preference = normalized
        .iter()
        .map(|row| {
            let v = row
                .iter()
                .zip(weights.iter())
                .map(|(r, w)| r.as_f64() * w.as_f64())
                .sum();
            Normalized::saturating(v)
        })
        .collect();

    Evaluation {
        column_max,
        normalized,
        preference,
        degenerate_columns,
    }
}

#[cfg(test)]
mod test {
    use proptest::{prop_assert, proptest};

    use crate::{
        num::assert_within,
        test::{decision_matrix, reference_matrix, weight_vector, REFERENCE_WEIGHTS},
        DecisionMatrix, Value, WeightVector,
    };

    #[test]
    fn reference_scenario() {
        let weights = WeightVector::new(REFERENCE_WEIGHTS).unwrap();
        let evaluation = super::evaluate(&reference_matrix(), &weights);

        assert_eq!(evaluation.column_max, [5.0; 5]);
        let first_row = evaluation.normalized[0].map(|r| r.as_f64());
        for (r, expected) in first_row.into_iter().zip([0.6, 0.6, 0.2, 0.2, 0.6]) {
            assert_within(r, expected, 1e-12);
        }
        let expected = [0.48, 0.75, 0.82, 0.52, 0.72];
        for (v, expected) in evaluation.preference.iter().zip(expected) {
            assert_within(v.as_f64(), expected, 1e-3);
        }
        assert!(evaluation.degenerate_columns.is_empty());
    }

    #[test]
    fn zero_column_contributes_nothing() {
        let row = |values: [f64; 3]| values.map(|x| Value::new(x).unwrap());
        let matrix = DecisionMatrix::new(vec![row([2.0, 0.0, 4.0]), row([1.0, 0.0, 2.0])]);
        let weights = WeightVector::new([0.5, 0.3, 0.2]).unwrap();
        let evaluation = super::evaluate(&matrix, &weights);

        assert_eq!(evaluation.degenerate_columns, [1]);
        assert_within(evaluation.preference[0].as_f64(), 0.7, 1e-12);
        assert_within(evaluation.preference[1].as_f64(), 0.35, 1e-12);
    }

    #[test]
    fn empty_matrix() {
        let weights = WeightVector::new(REFERENCE_WEIGHTS).unwrap();
        let evaluation = super::evaluate(&DecisionMatrix::new(vec![]), &weights);
        assert!(evaluation.preference.is_empty());
        assert!(evaluation.degenerate_columns.is_empty());
    }

    proptest! {
        #[test]
        fn preference_within_weight_total(matrix in decision_matrix(), weights in weight_vector()) {
            let evaluation = super::evaluate(&matrix, &weights);
            prop_assert!(evaluation.preference.len() == matrix.len());
            for v in &evaluation.preference {
                prop_assert!(v.as_f64() <= weights.sum() + 1e-9);
            }
        }
    }
}
