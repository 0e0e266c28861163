pub mod saw;
pub mod topsis;

use crate::{DecisionMatrix, Normalized, WeightVector};

/// The supported ranking methods. All criteria are treated as benefit-type by both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Saw,
    Topsis,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Saw, Method::Topsis];

    /// Preference values, row-aligned with `matrix`.
    pub fn preference<const N: usize>(
        self,
        matrix: &DecisionMatrix<N>,
        weights: &WeightVector<N>,
    ) -> Vec<Normalized> {
        match self {
            Method::Saw => saw::evaluate(matrix, weights).preference,
            Method::Topsis => topsis::evaluate(matrix, weights).preference,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Saw => write!(f, "SAW"),
            Method::Topsis => write!(f, "TOPSIS"),
        }
    }
}

impl std::str::FromStr for Method {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "saw" => Ok(Method::Saw),
            "topsis" => Ok(Method::Topsis),
            _ => Err(format!("unknown ranking method {s:?}")),
        }
    }
}
