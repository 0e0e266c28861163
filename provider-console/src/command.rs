use provider_selection::{Method, CRITERIA};
use thiserror::Error;

/// Range of a provider rating accepted from the console.
pub const RATING: std::ops::RangeInclusive<u8> = 1..=5;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("rating {0:?} for C{1} must be an integer from 1 to 5")]
    Rating(String, usize),

    #[error("weight {0:?} for C{1} must be a number from 0 to 1")]
    Weight(String, usize),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Help,
    List,
    Add { name: String, scores: [f64; CRITERIA] },
    Update { name: String, scores: [f64; CRITERIA] },
    Remove { name: String },
    ShowWeights,
    SetWeights([f64; CRITERIA]),
    Rank(Method),
    Compare,
    Quit,
}

pub const HELP: &str = "\
commands:
  list                          show all providers
  add <name> <c1> .. <c5>       add a provider rated 1-5 on each criterion
  update <name> <c1> .. <c5>    replace the ratings of a provider
  remove <name>                 delete a provider
  weights                       show criterion weights
  weights <w1> .. <w5>          replace all weights (must total 1.0)
  saw | topsis                  rank providers with one method
  compare                       compare both methods
  quit";

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`. Provider names may contain
    /// spaces: for `add` and `update` the last five tokens are the ratings.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (keyword, args) = (tokens[0].to_ascii_lowercase(), &tokens[1..]);
        let command = match keyword.as_str() {
            "help" | "?" => Command::Help,
            "list" | "ls" => Command::List,
            "add" => {
                let (name, scores) = named_ratings(args, "add <name> <c1> <c2> <c3> <c4> <c5>")?;
                Command::Add { name, scores }
            }
            "update" | "edit" => {
                let (name, scores) =
                    named_ratings(args, "update <name> <c1> <c2> <c3> <c4> <c5>")?;
                Command::Update { name, scores }
            }
            "remove" | "rm" | "delete" => {
                if args.is_empty() {
                    return Err(ParseError::Usage("remove <name>"));
                }
                Command::Remove {
                    name: args.join(" "),
                }
            }
            "weights" => match args.len() {
                0 => Command::ShowWeights,
                CRITERIA => Command::SetWeights(weights(args)?),
                _ => return Err(ParseError::Usage("weights [<w1> <w2> <w3> <w4> <w5>]")),
            },
            "compare" => Command::Compare,
            "quit" | "exit" => Command::Quit,
            other => match other.parse::<Method>() {
                Ok(method) => Command::Rank(method),
                Err(_) => return Err(ParseError::Unknown(tokens[0].to_string())),
            },
        };
        Ok(Some(command))
    }
}

fn named_ratings(
    args: &[&str],
    usage: &'static str,
) -> Result<(String, [f64; CRITERIA]), ParseError> {
    if args.len() <= CRITERIA {
        return Err(ParseError::Usage(usage));
    }
    let (name, ratings) = args.split_at(args.len() - CRITERIA);
    let mut scores = [0.0; CRITERIA];
    for (i, (score, token)) in scores.iter_mut().zip(ratings).enumerate() {
        let rating = token
            .parse::<u8>()
            .ok()
            .filter(|r| RATING.contains(r))
            .ok_or_else(|| ParseError::Rating(token.to_string(), i + 1))?;
        *score = f64::from(rating);
    }
    Ok((name.join(" "), scores))
}

fn weights(args: &[&str]) -> Result<[f64; CRITERIA], ParseError> {
    let mut weights = [0.0; CRITERIA];
    for (i, (weight, token)) in weights.iter_mut().zip(args).enumerate() {
        *weight = token
            .parse::<f64>()
            .ok()
            .filter(|w| (0.0..=1.0).contains(w))
            .ok_or_else(|| ParseError::Weight(token.to_string(), i + 1))?;
    }
    Ok(weights)
}
