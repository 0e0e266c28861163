use crate::Value;

/// Alternatives-by-criteria matrix of raw values. It is derived from the current set of
/// alternatives whenever a ranking is computed and is never stored; row order follows the input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecisionMatrix<const N: usize> {
    rows: Vec<[Value; N]>,
}

impl<const N: usize> DecisionMatrix<N> {
    pub fn new(rows: Vec<[Value; N]>) -> Self {
        Self { rows }
    }

    /// Extract the matrix from anything exposing per-alternative criterion values.
    pub fn extract<'a, A, Alternatives>(alternatives: Alternatives) -> Self
    where
        A: crate::Alternative<N> + 'a,
        Alternatives: IntoIterator<Item = &'a A>,
    {
        Self::new(alternatives.into_iter().map(|a| a.values()).collect())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[[Value; N]] {
        &self.rows
    }

    pub fn column(&self, criterion: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(move |row| row[criterion].as_f64())
    }

    /// Per-column maximum. Zero for an empty matrix.
    pub fn column_max(&self) -> [f64; N] {
        std::array::from_fn(|j| self.column(j).fold(0.0, f64::max))
    }

    /// Per-column Euclidean norm, `sqrt(sum of squares)`. Accumulated with `hypot` so that very
    /// large values do not overflow and very small ones do not underflow to zero.
    pub fn column_norm(&self) -> [f64; N] {
        std::array::from_fn(|j| self.column(j).fold(0.0, f64::hypot))
    }
}
