use alternative_ranking::{
    method::{saw, topsis},
    weights, Comparison, DecisionMatrix, Method, Normalized, Ranking, WeightVector,
};

use crate::{Config, Provider, Result, Store, CRITERIA, DEFAULT_WEIGHTS};

/// The state of one user's session: the provider table and the current criterion weights.
///
/// Nothing is cached. Every ranking is recomputed from the current table and weights, so callers
/// simply ask again after any mutation.
#[derive(Clone, Debug)]
pub struct Session {
    store: Store,
    weights: [f64; CRITERIA],
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            store: Store::seeded(),
            weights: DEFAULT_WEIGHTS,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let mut store = Store::new();
        for alternative in &config.alternatives {
            store.add(&alternative.name, alternative.scores)?;
        }
        let mut session = Self {
            store,
            weights: DEFAULT_WEIGHTS,
        };
        session.set_weights(config.weights)?;
        Ok(session)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn providers(&self) -> &[Provider] {
        self.store.list()
    }

    pub fn add(&mut self, name: &str, scores: [f64; CRITERIA]) -> Result<()> {
        self.store.add(name, scores)
    }

    pub fn update(&mut self, name: &str, scores: [f64; CRITERIA]) -> Result<()> {
        self.store.update(name, scores)
    }

    pub fn remove(&mut self, name: &str) -> Result<Provider> {
        self.store.remove(name)
    }

    /// Replace the whole weight vector. Each component must lie in [0, 1]. The total is not
    /// checked here: a vector that does not sum to 1.0 is kept, and rankings are refused until it
    /// is corrected.
    pub fn set_weights(&mut self, weights: [f64; CRITERIA]) -> Result<()> {
        let mut checked = [0.0; CRITERIA];
        for (index, (slot, value)) in checked.iter_mut().zip(weights).enumerate() {
            *slot = Normalized::new(value)
                .ok_or(alternative_ranking::Error::WeightOutOfRange { index, value })?
                .as_f64();
        }
        self.weights = checked;
        if self.weights_valid() {
            tracing::info!(weights = ?self.weights, "weights updated");
        } else {
            tracing::warn!(
                "weights updated to {:?}, total {:.2} is not 1.0; rankings are withheld",
                self.weights,
                self.weight_total()
            );
        }
        Ok(())
    }

    pub fn weights(&self) -> [f64; CRITERIA] {
        self.weights
    }

    pub fn weight_total(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn weights_valid(&self) -> bool {
        weights::is_valid(&self.weights)
    }

    pub fn weight_vector(&self) -> Result<WeightVector<CRITERIA>> {
        Ok(WeightVector::new(self.weights)?)
    }

    pub fn rank(&self, method: Method) -> Result<Ranking<String>> {
        let preference = match method {
            Method::Saw => self.saw()?.preference,
            Method::Topsis => self.topsis()?.preference,
        };
        self.ranking(preference)
    }

    /// Rank the current providers by preference values already computed for them, such as the
    /// `preference` of [`Self::saw`] or [`Self::topsis`].
    pub fn ranking(&self, preference: Vec<Normalized>) -> Result<Ranking<String>> {
        Ok(Ranking::from_scores(self.names(), preference)?)
    }

    pub fn rank_saw(&self) -> Result<Ranking<String>> {
        self.rank(Method::Saw)
    }

    pub fn rank_topsis(&self) -> Result<Ranking<String>> {
        self.rank(Method::Topsis)
    }

    /// Full SAW evaluation, including the normalized matrix, row-aligned with [`Self::providers`].
    pub fn saw(&self) -> Result<saw::Evaluation<CRITERIA>> {
        let evaluation = saw::evaluate(&self.matrix(), &self.weight_vector()?);
        for column in &evaluation.degenerate_columns {
            tracing::warn!("SAW: every provider scores 0 on criterion {}", column + 1);
        }
        Ok(evaluation)
    }

    /// Full TOPSIS evaluation, row-aligned with [`Self::providers`].
    pub fn topsis(&self) -> Result<topsis::Evaluation<CRITERIA>> {
        let evaluation = topsis::evaluate(&self.matrix(), &self.weight_vector()?);
        for row in &evaluation.degenerate_rows {
            tracing::warn!(
                "TOPSIS: {:?} coincides with both ideal solutions, preference set to 0",
                self.store.list()[*row].name
            );
        }
        Ok(evaluation)
    }

    /// SAW and TOPSIS scores per provider in table order, with each method's recommendation.
    pub fn compare(&self) -> Result<Comparison<String>> {
        let saw = self.saw()?.preference;
        let topsis = self.topsis()?.preference;
        Ok(Comparison::new(self.names(), saw, topsis)?)
    }

    fn matrix(&self) -> DecisionMatrix<CRITERIA> {
        DecisionMatrix::extract(self.store.list())
    }

    fn names(&self) -> Vec<String> {
        self.store.names().map(str::to_string).collect()
    }
}
