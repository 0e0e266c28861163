use std::fmt::{self, Display, Formatter};

use alternative_ranking::method::{saw, topsis};
use provider_selection::{Comparison, Criterion, Method, Normalized, Provider, Ranking, CRITERIA};
use serde::Serialize;

const BAR_WIDTH: f64 = 40.0;
/// How many of the best alternatives a ranking report recommends.
const PODIUM: usize = 3;

fn name_width<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names.map(str::len).max().unwrap_or(0).max("Alternative".len())
}

fn header(f: &mut Formatter<'_>, width: usize) -> fmt::Result {
    write!(f, "{:<width$}", "Alternative")?;
    for criterion in Criterion::ALL {
        write!(f, " {:>6}", criterion.code())?;
    }
    writeln!(f)
}

pub struct Providers<'a>(pub &'a [Provider]);

impl Display for Providers<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "no providers");
        }
        let width = name_width(self.0.iter().map(|p| p.name.as_str()));
        header(f, width)?;
        for provider in self.0 {
            write!(f, "{:<width$}", provider.name)?;
            for score in provider.scores {
                write!(f, " {:>6}", score)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub struct Weights(pub [f64; CRITERIA]);

impl Display for Weights {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (criterion, weight) in Criterion::ALL.iter().zip(self.0) {
            writeln!(f, "{:<24} {weight:.2}", criterion.to_string())?;
        }
        let total: f64 = self.0.iter().sum();
        write!(f, "{:<24} {total:.2}", "Total")?;
        if alternative_ranking::weights::is_valid(&self.0) {
            write!(f, "  (valid)")
        } else {
            write!(f, "  (weights must total 1.0, rankings are withheld)")
        }
    }
}

fn matrix(
    f: &mut Formatter<'_>,
    title: &str,
    providers: &[Provider],
    rows: &[[Normalized; CRITERIA]],
) -> fmt::Result {
    writeln!(f, "{title}")?;
    let width = name_width(providers.iter().map(|p| p.name.as_str()));
    header(f, width)?;
    for (provider, row) in providers.iter().zip(rows) {
        write!(f, "{:<width$}", provider.name)?;
        for value in row {
            write!(f, " {:>6.2}", value.as_f64())?;
        }
        writeln!(f)?;
    }
    Ok(())
}

fn vector(f: &mut Formatter<'_>, title: &str, values: impl IntoIterator<Item = f64>) -> fmt::Result {
    write!(f, "{title:<12}")?;
    for value in values {
        write!(f, " {value:>6.4}")?;
    }
    writeln!(f)
}

fn ranking(f: &mut Formatter<'_>, method: Method, ranking: &Ranking<String>) -> fmt::Result {
    writeln!(f, "{method} ranking")?;
    let width = name_width(ranking.iter().map(|r| r.id.as_str()));
    for (rank, entry) in ranking.iter().enumerate() {
        writeln!(f, "{:>3}. {:<width$} {:.3}", rank + 1, entry.id, entry.score.as_f64())?;
    }
    let podium: Vec<&str> = ranking
        .top::<PODIUM>()
        .into_iter()
        .map(|r| r.id.as_str())
        .collect();
    if !podium.is_empty() {
        write!(f, "Recommended: {}", podium.join(", "))?;
    }
    Ok(())
}

pub struct SawReport<'a> {
    pub providers: &'a [Provider],
    pub evaluation: &'a saw::Evaluation<CRITERIA>,
    pub ranking: &'a Ranking<String>,
}

impl Display for SawReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.providers.is_empty() {
            return write!(f, "no providers");
        }
        vector(f, "max", self.evaluation.column_max)?;
        matrix(f, "Normalized matrix (R)", self.providers, &self.evaluation.normalized)?;
        writeln!(f)?;
        ranking(f, Method::Saw, self.ranking)
    }
}

pub struct TopsisReport<'a> {
    pub providers: &'a [Provider],
    pub evaluation: &'a topsis::Evaluation<CRITERIA>,
    pub ranking: &'a Ranking<String>,
}

impl Display for TopsisReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.providers.is_empty() {
            return write!(f, "no providers");
        }
        let evaluation = self.evaluation;
        vector(f, "divisor", evaluation.divisors)?;
        matrix(f, "Normalized matrix (R)", self.providers, &evaluation.normalized)?;
        matrix(f, "Weighted matrix (Y)", self.providers, &evaluation.weighted)?;
        vector(f, "A+", evaluation.ideal_best.map(|a| a.as_f64()))?;
        vector(f, "A-", evaluation.ideal_worst.map(|a| a.as_f64()))?;
        let width = name_width(self.providers.iter().map(|p| p.name.as_str()));
        writeln!(f, "{:<width$} {:>7} {:>7}", "Alternative", "D+", "D-")?;
        for ((provider, d_best), d_worst) in self
            .providers
            .iter()
            .zip(&evaluation.distance_best)
            .zip(&evaluation.distance_worst)
        {
            writeln!(f, "{:<width$} {d_best:>7.4} {d_worst:>7.4}", provider.name)?;
        }
        writeln!(f)?;
        ranking(f, Method::Topsis, self.ranking)
    }
}

/// Side-by-side horizontal bars, one pair per provider in table order.
pub struct Chart<'a>(pub &'a Comparison<String>);

impl Display for Chart<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let comparison = self.0;
        if comparison.rows().is_empty() {
            return write!(f, "no providers");
        }
        let width = name_width(comparison.rows().iter().map(|r| r.id.as_str()));
        let bar = |score: Normalized, fill: &str| fill.repeat((score.as_f64() * BAR_WIDTH).round() as usize);
        for row in comparison.rows() {
            writeln!(f, "{:<width$} SAW    {:.3} {}", row.id, row.saw.as_f64(), bar(row.saw, "#"))?;
            writeln!(f, "{:<width$} TOPSIS {:.3} {}", "", row.topsis.as_f64(), bar(row.topsis, "="))?;
        }
        writeln!(f)?;
        if let Some(best) = comparison.best_saw() {
            writeln!(f, "Best (SAW):    {best}")?;
        }
        if let Some(best) = comparison.best_topsis() {
            write!(f, "Best (TOPSIS): {best}")?;
        }
        Ok(())
    }
}

#[derive(Serialize)]
pub struct RankingJson<'a> {
    pub method: String,
    pub ranking: Vec<RankedJson<'a>>,
}

#[derive(Serialize)]
pub struct RankedJson<'a> {
    pub rank: usize,
    pub name: &'a str,
    pub score: f64,
}

impl<'a> RankingJson<'a> {
    pub fn new(method: Method, ranking: &'a Ranking<String>) -> Self {
        Self {
            method: method.to_string(),
            ranking: ranking
                .iter()
                .enumerate()
                .map(|(i, r)| RankedJson {
                    rank: i + 1,
                    name: &r.id,
                    score: r.score.as_f64(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
pub struct ComparisonJson<'a> {
    pub rows: Vec<ComparisonRowJson<'a>>,
    pub best_saw: Option<&'a str>,
    pub best_topsis: Option<&'a str>,
}

#[derive(Serialize)]
pub struct ComparisonRowJson<'a> {
    pub name: &'a str,
    pub saw: f64,
    pub topsis: f64,
}

impl<'a> ComparisonJson<'a> {
    pub fn new(comparison: &'a Comparison<String>) -> Self {
        Self {
            rows: comparison
                .rows()
                .iter()
                .map(|row| ComparisonRowJson {
                    name: &row.id,
                    saw: row.saw.as_f64(),
                    topsis: row.topsis.as_f64(),
                })
                .collect(),
            best_saw: comparison.best_saw().map(String::as_str),
            best_topsis: comparison.best_topsis().map(String::as_str),
        }
    }
}
