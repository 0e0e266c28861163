pub mod config;
pub mod session;
pub mod store;

use std::fmt::Display;

use alternative_ranking::{Alternative, Value};
use thiserror::Error;

pub use alternative_ranking::{Comparison, Method, Normalized, Ranked, Ranking};

pub use crate::config::{Config, ConfigError};
pub use crate::session::Session;
pub use crate::store::Store;

pub const CRITERIA: usize = 5;

/// Initial importance of each criterion, aligned with [`Criterion::ALL`].
pub const DEFAULT_WEIGHTS: [f64; CRITERIA] = [0.35, 0.25, 0.20, 0.10, 0.10];

/// Providers every new session starts with.
pub const DEFAULT_PROVIDERS: [(&str, [f64; CRITERIA]); 5] = [
    ("A1 IndiHome", [3.0, 3.0, 1.0, 1.0, 3.0]),
    ("A2 Biznet", [4.0, 3.0, 5.0, 5.0, 1.0]),
    ("A3 MyRepublic", [5.0, 3.0, 3.0, 5.0, 5.0]),
    ("A4 First Media", [3.0, 3.0, 1.0, 5.0, 1.0]),
    ("A5 CBN", [1.0, 5.0, 5.0, 5.0, 5.0]),
];

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("alternative name must not be empty")]
    EmptyName,

    #[error("alternative {0:?} already exists")]
    DuplicateName(String),

    #[error("score {value} for {criterion} must be a finite, non-negative number")]
    InvalidScore { criterion: Criterion, value: f64 },

    #[error("alternative {0:?} not found")]
    NotFound(String),

    #[error(transparent)]
    Ranking(#[from] alternative_ranking::Error),
}

/// The fixed criteria providers are rated on. Ratings are already oriented so that a higher value
/// is better for every criterion, including the cost criteria.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Criterion {
    SubscriptionCost,
    DownloadSpeed,
    UploadSymmetry,
    FupLimit,
    InstallationCost,
}

impl Criterion {
    pub const ALL: [Criterion; CRITERIA] = [
        Criterion::SubscriptionCost,
        Criterion::DownloadSpeed,
        Criterion::UploadSymmetry,
        Criterion::FupLimit,
        Criterion::InstallationCost,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Criterion::SubscriptionCost => "C1",
            Criterion::DownloadSpeed => "C2",
            Criterion::UploadSymmetry => "C3",
            Criterion::FupLimit => "C4",
            Criterion::InstallationCost => "C5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::SubscriptionCost => "Subscription cost",
            Criterion::DownloadSpeed => "Download speed",
            Criterion::UploadSymmetry => "Upload symmetry",
            Criterion::FupLimit => "FUP limit",
            Criterion::InstallationCost => "Installation cost",
        }
    }
}

impl Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code(), self.label())
    }
}

/// An internet service provider and its rating on each [`Criterion`].
#[derive(Clone, Debug, PartialEq)]
pub struct Provider {
    pub name: String,
    pub scores: [Value; CRITERIA],
}

impl Provider {
    pub fn new(name: &str, scores: [f64; CRITERIA]) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            scores: parse_scores(scores)?,
        })
    }

    pub fn score(&self, criterion: Criterion) -> Value {
        self.scores[criterion as usize]
    }
}

impl Alternative<CRITERIA> for Provider {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.name.clone()
    }

    fn values(&self) -> [Value; CRITERIA] {
        self.scores
    }
}

pub(crate) fn parse_scores(scores: [f64; CRITERIA]) -> Result<[Value; CRITERIA]> {
    let mut values = [Value::ZERO; CRITERIA];
    for ((value, score), criterion) in values.iter_mut().zip(scores).zip(Criterion::ALL) {
        *value = Value::new(score).ok_or(Error::InvalidScore {
            criterion,
            value: score,
        })?;
    }
    Ok(values)
}
