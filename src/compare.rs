use crate::{Error, Normalized, Ranking, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonRow<Id> {
    pub id: Id,
    pub saw: Normalized,
    pub topsis: Normalized,
}

/// SAW and TOPSIS scores side by side, in input order, together with the recommendation of each
/// method.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison<Id> {
    rows: Vec<ComparisonRow<Id>>,
    saw: Ranking<Id>,
    topsis: Ranking<Id>,
}

impl<Id: Clone + PartialEq> Comparison<Id> {
    pub fn new(ids: Vec<Id>, saw: Vec<Normalized>, topsis: Vec<Normalized>) -> Result<Self> {
        if saw.len() != ids.len() || topsis.len() != ids.len() {
            return Err(Error::LengthMismatch {
                expected: ids.len(),
                actual: if saw.len() != ids.len() { saw.len() } else { topsis.len() },
            });
        }
        let rows = ids
            .iter()
            .zip(saw.iter().zip(&topsis))
            .map(|(id, (&saw, &topsis))| ComparisonRow {
                id: id.clone(),
                saw,
                topsis,
            })
            .collect();
        Ok(Self {
            rows,
            saw: Ranking::from_scores(ids.clone(), saw)?,
            topsis: Ranking::from_scores(ids, topsis)?,
        })
    }

    pub fn rows(&self) -> &[ComparisonRow<Id>] {
        &self.rows
    }

    pub fn saw(&self) -> &Ranking<Id> {
        &self.saw
    }

    pub fn topsis(&self) -> &Ranking<Id> {
        &self.topsis
    }

    pub fn best_saw(&self) -> Option<&Id> {
        self.saw.best().map(|r| &r.id)
    }

    pub fn best_topsis(&self) -> Option<&Id> {
        self.topsis.best().map(|r| &r.id)
    }

    /// Both methods recommend the same alternative. False when there is nothing to compare.
    pub fn agree(&self) -> bool {
        match (self.best_saw(), self.best_topsis()) {
            (Some(saw), Some(topsis)) => saw == topsis,
            _ => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::Comparison;
    use crate::{Error, Normalized};

    fn n(values: &[f64]) -> Vec<Normalized> {
        values.iter().map(|v| Normalized::new(*v).unwrap()).collect()
    }

    #[test]
    fn rows_keep_input_order() {
        let comparison =
            Comparison::new(vec!["x", "y", "z"], n(&[0.2, 0.9, 0.5]), n(&[0.6, 0.1, 0.3])).unwrap();
        let ids: Vec<&str> = comparison.rows().iter().map(|r| r.id).collect();
        assert_eq!(ids, ["x", "y", "z"]);
        assert_eq!(comparison.best_saw(), Some(&"y"));
        assert_eq!(comparison.best_topsis(), Some(&"x"));
        assert!(!comparison.agree());
    }

    #[test]
    fn empty_comparison() {
        let comparison = Comparison::<&str>::new(vec![], vec![], vec![]).unwrap();
        assert!(comparison.rows().is_empty());
        assert_eq!(comparison.best_saw(), None);
        assert!(!comparison.agree());
    }

    #[test]
    fn mismatched_lengths() {
        assert_eq!(
            Comparison::new(vec![1, 2], n(&[0.1, 0.2]), n(&[0.3])),
            Err(Error::LengthMismatch {
                expected: 2,
                actual: 1
            })
        );
    }
}
