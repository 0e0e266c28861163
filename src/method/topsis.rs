//! TOPSIS (Technique for Order Preference by Similarity to Ideal Solution). Columns are scaled by
//! their Euclidean norm and weighted, then each alternative scores its relative closeness to the
//! ideal-best point versus the ideal-worst point.

use crate::{DecisionMatrix, Normalized, WeightVector};

/// Intermediate and final values of a TOPSIS run, row-aligned with the input matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation<const N: usize> {
    /// Column norms, `sqrt(sum over i of M[i][j]^2)`.
    pub divisors: [f64; N],
    pub normalized: Vec<[Normalized; N]>,
    pub weighted: Vec<[Normalized; N]>,
    pub ideal_best: [Normalized; N],
    pub ideal_worst: [Normalized; N],
    pub distance_best: Vec<f64>,
    pub distance_worst: Vec<f64>,
    pub preference: Vec<Normalized>,
    /// Rows that coincide with both ideal points. Their preference is defined as 0.
    pub degenerate_rows: Vec<usize>,
}

pub fn evaluate<const N: usize>(
    matrix: &DecisionMatrix<N>,
    weights: &WeightVector<N>,
) -> Evaluation<N> {
    let divisors = matrix.column_norm();

    let normalized: Vec<[Normalized; N]> = matrix
        .rows()
        .iter()
        .map(|row| {
            std::array::from_fn(|j| {
                if divisors[j] == 0.0 {
                    return Normalized::ZERO;
                }
                Normalized::saturating(row[j].as_f64() / divisors[j])
            })
        })
        .collect();

    let weighted: Vec<[Normalized; N]> = normalized
        .iter()
        .map(|row| std::array::from_fn(|j| row[j] * weights.get(j)))
        .collect();

    let column = |j: usize| weighted.iter().map(move |row| row[j]);
    let ideal_best: [Normalized; N] =
        std::array::from_fn(|j| column(j).max().unwrap_or(Normalized::ZERO));
    let ideal_worst: [Normalized; N] =
        std::array::from_fn(|j| column(j).min().unwrap_or(Normalized::ZERO));

    let distance = |row: &[Normalized; N], ideal: &[Normalized; N]| -> f64 {
        row.iter()
            .zip(ideal)
            .map(|(y, a)| (y.as_f64() - a.as_f64()).powi(2))
            .sum::<f64>()
            .sqrt()
    };
    let distance_best: Vec<f64> = weighted.iter().map(|row| distance(row, &ideal_best)).collect();
    let distance_worst: Vec<f64> = weighted.iter().map(|row| distance(row, &ideal_worst)).collect();

    let mut degenerate_rows = Vec::new();
    let preference = distance_best
        .iter()
        .zip(&distance_worst)
        .enumerate()
        .map(|(i, (d_best, d_worst))| {
            let total = d_best + d_worst;
            if total == 0.0 {
                degenerate_rows.push(i);
                return Normalized::ZERO;
            }
            Normalized::saturating(d_worst / total)
        })
        .collect();

    Evaluation {
        divisors,
        normalized,
        weighted,
        ideal_best,
        ideal_worst,
        distance_best,
        distance_worst,
        preference,
        degenerate_rows,
    }
}

#[cfg(test)]
mod test {
    use proptest::{prop_assert, proptest};

    use crate::{
        num::assert_within,
        test::{decision_matrix, reference_matrix, weight_vector, REFERENCE_WEIGHTS},
        DecisionMatrix, Normalized, Value, WeightVector,
    };

    #[test]
    fn reference_scenario() {
        let weights = WeightVector::new(REFERENCE_WEIGHTS).unwrap();
        let evaluation = super::evaluate(&reference_matrix(), &weights);

        assert_within(evaluation.divisors[0], 60_f64.sqrt(), 1e-12);
        assert_within(evaluation.divisors[3], 101_f64.sqrt(), 1e-12);
        assert_within(evaluation.ideal_best[0].as_f64(), 0.2259, 1e-4);
        assert_within(evaluation.ideal_worst[1].as_f64(), 0.0960, 1e-4);

        let d_best = [0.1581, 0.0936, 0.0820, 0.1593, 0.1807];
        let d_worst = [0.0939, 0.1745, 0.1987, 0.0987, 0.1371];
        for i in 0..5 {
            assert_within(evaluation.distance_best[i], d_best[i], 1e-4);
            assert_within(evaluation.distance_worst[i], d_worst[i], 1e-4);
        }
        let expected = [0.373, 0.651, 0.708, 0.383, 0.431];
        for (v, expected) in evaluation.preference.iter().zip(expected) {
            assert_within(v.as_f64(), expected, 1e-3);
        }
        assert!(evaluation.degenerate_rows.is_empty());
    }

    #[test]
    fn single_alternative_is_degenerate() {
        let row = [3.0, 1.0].map(|x| Value::new(x).unwrap());
        let weights = WeightVector::new([0.5, 0.5]).unwrap();
        let evaluation = super::evaluate(&DecisionMatrix::new(vec![row]), &weights);
        assert_eq!(evaluation.degenerate_rows, [0]);
        assert_eq!(evaluation.preference, [Normalized::ZERO]);
    }

    #[test]
    fn zero_column_is_ignored() {
        let row = |values: [f64; 2]| values.map(|x| Value::new(x).unwrap());
        let matrix = DecisionMatrix::new(vec![row([0.0, 4.0]), row([0.0, 1.0])]);
        let weights = WeightVector::new([0.5, 0.5]).unwrap();
        let evaluation = super::evaluate(&matrix, &weights);
        assert_eq!(evaluation.divisors[0], 0.0);
        assert_eq!(evaluation.preference, [Normalized::ONE, Normalized::ZERO]);
    }

    #[test]
    fn ranking_is_scale_invariant() {
        let weights = WeightVector::new(REFERENCE_WEIGHTS).unwrap();
        let expected = super::evaluate(&reference_matrix(), &weights);
        for scale in [1e200, 1e-200] {
            let scaled = DecisionMatrix::new(
                reference_matrix()
                    .rows()
                    .iter()
                    .map(|row| row.map(|x| Value::new(x.as_f64() * scale).unwrap()))
                    .collect(),
            );
            let evaluation = super::evaluate(&scaled, &weights);
            assert!(evaluation.degenerate_rows.is_empty());
            for (v, expected) in evaluation.preference.iter().zip(&expected.preference) {
                assert_within(v.as_f64(), expected.as_f64(), 1e-9);
            }
        }

        let pair = |scale: f64| {
            let row = |x: f64| [Value::new(x * scale).unwrap(); 2];
            DecisionMatrix::new(vec![row(1.0), row(2.0)])
        };
        let weights = WeightVector::new([0.5, 0.5]).unwrap();
        for scale in [1.0, 1e200, 1e-200] {
            let evaluation = super::evaluate(&pair(scale), &weights);
            assert_eq!(evaluation.preference, [Normalized::ZERO, Normalized::ONE]);
            assert!(evaluation.degenerate_rows.is_empty());
        }
    }

    #[test]
    fn empty_matrix() {
        let weights = WeightVector::new(REFERENCE_WEIGHTS).unwrap();
        let evaluation = super::evaluate(&DecisionMatrix::new(vec![]), &weights);
        assert!(evaluation.preference.is_empty());
        assert!(evaluation.distance_best.is_empty());
    }

    proptest! {
        #[test]
        fn distances_and_preferences_bounded(matrix in decision_matrix(), weights in weight_vector()) {
            let evaluation = super::evaluate(&matrix, &weights);
            prop_assert!(evaluation.distance_best.iter().all(|d| *d >= 0.0));
            prop_assert!(evaluation.distance_worst.iter().all(|d| *d >= 0.0));
            prop_assert!(evaluation.preference.len() == matrix.len());
            for i in &evaluation.degenerate_rows {
                prop_assert!(evaluation.preference[*i].is_zero());
            }
        }
    }
}
