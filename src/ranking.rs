use std::cmp::Reverse;

use arrayvec::ArrayVec;

use crate::{Error, Normalized, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ranked<Id> {
    pub id: Id,
    pub score: Normalized,
}

/// Alternatives ordered by descending score. Alternatives with equal scores keep their input
/// order, so repeated rankings of the same input are identical.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ranking<Id> {
    entries: Vec<Ranked<Id>>,
}

impl<Id> Ranking<Id> {
    pub fn from_scores(mut ids: Vec<Id>, mut scores: Vec<Normalized>) -> Result<Self> {
        if ids.len() != scores.len() {
            return Err(Error::LengthMismatch {
                expected: ids.len(),
                actual: scores.len(),
            });
        }
        let mut sort = permutation::sort_by_key(&scores, |score| Reverse(*score));
        sort.apply_slice_in_place(&mut ids);
        sort.apply_slice_in_place(&mut scores);
        let entries = ids
            .into_iter()
            .zip(scores)
            .map(|(id, score)| Ranked { id, score })
            .collect();
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ranked<Id>> {
        self.entries.iter()
    }

    pub fn best(&self) -> Option<&Ranked<Id>> {
        self.entries.first()
    }

    /// The first `LIMIT` entries, or all of them if there are fewer.
    pub fn top<const LIMIT: usize>(&self) -> ArrayVec<&Ranked<Id>, LIMIT> {
        self.entries.iter().take(LIMIT).collect()
    }
}

impl<Id: PartialEq> Ranking<Id> {
    /// Zero-based rank of `id`.
    pub fn position(&self, id: &Id) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.id == id)
    }

    pub fn score(&self, id: &Id) -> Option<Normalized> {
        self.entries
            .iter()
            .find(|entry| &entry.id == id)
            .map(|entry| entry.score)
    }
}

impl<'r, Id> IntoIterator for &'r Ranking<Id> {
    type Item = &'r Ranked<Id>;
    type IntoIter = std::slice::Iter<'r, Ranked<Id>>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
