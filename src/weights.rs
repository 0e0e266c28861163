use crate::{Error, Normalized, Result};

/// Maximum absolute distance of a weight total from 1.0 that is still considered valid.
pub const TOLERANCE: f64 = 1e-9;

/// Returns true iff the weights sum to 1.0 within [`TOLERANCE`]. Component ranges are not checked
/// here; see [`WeightVector::new`].
pub fn is_valid(weights: &[f64]) -> bool {
    (weights.iter().sum::<f64>() - 1.0).abs() < TOLERANCE
}

/// Criterion weights, positionally aligned to the criteria of a decision matrix. A `WeightVector`
/// only exists if every component lies in [0, 1] and the components sum to 1.0, so the ranking
/// methods never see an unnormalized vector.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct WeightVector<const N: usize>([Normalized; N]);

impl<const N: usize> WeightVector<N> {
    pub fn new(weights: [f64; N]) -> Result<Self> {
        let mut components = [Normalized::ZERO; N];
        for (index, (component, value)) in components.iter_mut().zip(weights).enumerate() {
            *component = Normalized::new(value).ok_or(Error::WeightOutOfRange { index, value })?;
        }
        if !is_valid(&weights) {
            return Err(Error::InvalidWeights {
                sum: weights.iter().sum(),
            });
        }
        Ok(Self(components))
    }

    pub fn get(&self, criterion: usize) -> Normalized {
        self.0[criterion]
    }

    pub fn iter(&self) -> impl Iterator<Item = Normalized> + '_ {
        self.0.iter().copied()
    }

    pub fn as_array(&self) -> [f64; N] {
        self.0.map(|w| w.as_f64())
    }

    pub fn sum(&self) -> f64 {
        self.iter().map(|w| w.as_f64()).sum()
    }
}

impl<const N: usize> std::fmt::Debug for WeightVector<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
