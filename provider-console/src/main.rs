mod command;
mod render;

use std::io::{stdin, BufRead as _};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use provider_selection::{Config, Method, Session};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::command::{Command, HELP};
use crate::render::{
    Chart, ComparisonJson, Providers, RankingJson, SawReport, TopsisReport, Weights,
};

/// Rank internet service providers with SAW and TOPSIS. Commands are read from stdin, one per
/// line; the provider table lives only as long as the process.
#[derive(Debug, Parser)]
#[command(name = "isp-rank", version)]
struct Args {
    /// TOML file with the initial weights and providers. Defaults apply if it does not exist.
    #[arg(long, default_value = "isp-rank.toml")]
    config: PathBuf,

    /// Print rankings and comparisons as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Session(#[from] provider_selection::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("provider_selection=info")),
        )
        .init();

    let args = Args::parse();
    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut session = match Session::from_config(&config) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("invalid configuration {}: {err}", args.config.display());
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("session ready with {} providers", session.providers().len());

    for line in stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::error!("failed to read stdin: {err}");
                return ExitCode::FAILURE;
            }
        };
        let command = match Command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("error: {err}");
                continue;
            }
        };
        match execute(&mut session, command, args.json) {
            Ok(output) => println!("{output}"),
            Err(err) => eprintln!("error: {err}"),
        }
    }
    ExitCode::SUCCESS
}

/// Run one command against the session. Rankings are recomputed from scratch every time.
fn execute(session: &mut Session, command: Command, json: bool) -> Result<String, Error> {
    let output = match command {
        Command::Help => HELP.to_string(),
        Command::List => Providers(session.providers()).to_string(),
        Command::Add { name, scores } => {
            session.add(&name, scores)?;
            format!("added {}", name.trim())
        }
        Command::Update { name, scores } => {
            session.update(&name, scores)?;
            format!("updated {}", name.trim())
        }
        Command::Remove { name } => {
            let removed = session.remove(&name)?;
            format!("removed {}", removed.name)
        }
        Command::ShowWeights => Weights(session.weights()).to_string(),
        Command::SetWeights(weights) => {
            session.set_weights(weights)?;
            Weights(session.weights()).to_string()
        }
        Command::Rank(method) if json => {
            serde_json::to_string_pretty(&RankingJson::new(method, &session.rank(method)?))?
        }
        Command::Rank(Method::Saw) => {
            let evaluation = session.saw()?;
            let ranking = session.ranking(evaluation.preference.clone())?;
            SawReport {
                providers: session.providers(),
                evaluation: &evaluation,
                ranking: &ranking,
            }
            .to_string()
        }
        Command::Rank(Method::Topsis) => {
            let evaluation = session.topsis()?;
            let ranking = session.ranking(evaluation.preference.clone())?;
            TopsisReport {
                providers: session.providers(),
                evaluation: &evaluation,
                ranking: &ranking,
            }
            .to_string()
        }
        Command::Compare => {
            let comparison = session.compare()?;
            if json {
                serde_json::to_string_pretty(&ComparisonJson::new(&comparison))?
            } else {
                Chart(&comparison).to_string()
            }
        }
        Command::Quit => String::new(),
    };
    Ok(output)
}
