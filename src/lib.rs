pub mod compare;
pub mod error;
pub mod matrix;
pub mod method;
pub mod num;
pub mod ranking;
pub mod weights;

pub use arrayvec::ArrayVec;

pub use crate::compare::{Comparison, ComparisonRow};
pub use crate::error::{Error, Result};
pub use crate::matrix::DecisionMatrix;
pub use crate::method::Method;
pub use crate::num::{Normalized, Value};
pub use crate::ranking::{Ranked, Ranking};
pub use crate::weights::WeightVector;

/// Something that can be ranked against `N` benefit-type criteria.
pub trait Alternative<const N: usize> {
    type Id: Clone;
    fn id(&self) -> Self::Id;
    fn values(&self) -> [Value; N];
}

/// Rank `alternatives` using `method`. Fails without computing anything if `weights` does not
/// form a valid [`WeightVector`]. An empty set of alternatives produces an empty ranking.
pub fn rank<A, const N: usize>(
    method: Method,
    alternatives: &[A],
    weights: [f64; N],
) -> Result<Ranking<A::Id>>
where
    A: Alternative<N>,
{
    let weights = WeightVector::new(weights)?;
    rank_with(method, alternatives, &weights)
}

pub fn rank_with<A, const N: usize>(
    method: Method,
    alternatives: &[A],
    weights: &WeightVector<N>,
) -> Result<Ranking<A::Id>>
where
    A: Alternative<N>,
{
    let matrix = DecisionMatrix::<N>::extract(alternatives);
    let ids = alternatives.iter().map(|a| a.id()).collect();
    Ranking::from_scores(ids, method.preference(&matrix, weights))
}

pub fn rank_saw<A, const N: usize>(alternatives: &[A], weights: [f64; N]) -> Result<Ranking<A::Id>>
where
    A: Alternative<N>,
{
    rank(Method::Saw, alternatives, weights)
}

pub fn rank_topsis<A, const N: usize>(
    alternatives: &[A],
    weights: [f64; N],
) -> Result<Ranking<A::Id>>
where
    A: Alternative<N>,
{
    rank(Method::Topsis, alternatives, weights)
}

/// Score `alternatives` with every method, keeping input order.
pub fn compare<A, const N: usize>(
    alternatives: &[A],
    weights: [f64; N],
) -> Result<Comparison<A::Id>>
where
    A: Alternative<N>,
    A::Id: PartialEq,
{
    let weights = WeightVector::new(weights)?;
    let matrix = DecisionMatrix::<N>::extract(alternatives);
    let ids = alternatives.iter().map(|a| a.id()).collect();
    Comparison::new(
        ids,
        Method::Saw.preference(&matrix, &weights),
        Method::Topsis.preference(&matrix, &weights),
    )
}
