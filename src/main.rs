mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::input::LoadError;
use crate::model::PointsTable;
use crate::pipeline::stage1_results::run_stage1;
use crate::pipeline::stage2_predictions::{
    CollectError, DEFAULT_PLAYER_COUNT, Stage2Params, run_stage2,
};
use crate::pipeline::stage3_score::run_stage3;
use crate::pipeline::stage4_rank::run_stage4;
use crate::pipeline::stage5_report::{write_reports, write_results_echo};
use crate::report::{ReportError, ReportMode};

const DEFAULT_RESULTS_PATH: &str = "results.txt";

#[derive(Debug, Parser)]
#[command(name = "mxfantasy")]
#[command(version, about = "Score motocross fantasy predictions against race results", long_about = None)]
struct Cli {
    /// Race results, one rider per line in finishing order (.gz accepted)
    #[arg(long, default_value = DEFAULT_RESULTS_PATH)]
    results: PathBuf,

    /// Number of players to collect predictions from
    #[arg(long, default_value_t = DEFAULT_PLAYER_COUNT, value_parser = parse_player_count)]
    players: usize,

    /// Output format for the leaderboard and podium
    #[arg(long, value_enum, default_value_t = ReportMode::Text)]
    format: ReportMode,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone)]
struct RunConfig {
    results_path: PathBuf,
    players: usize,
    report_mode: ReportMode,
    verbosity: u8,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            results_path: cli.results,
            players: cli.players,
            report_mode: cli.format,
            verbosity: cli.verbose,
        }
    }
}

#[derive(Debug, Error)]
enum RunError {
    #[error("Error reading {} file: {}", .0.path().display(), .0)]
    Load(#[from] LoadError),
    #[error("{0}")]
    Collect(#[from] CollectError),
    #[error("{0}")]
    Report(#[from] ReportError),
}

fn main() {
    let config = RunConfig::from(Cli::parse());
    logging::init(config.verbosity);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut prompts: Box<dyn Write> = match config.report_mode {
        ReportMode::Text => Box::new(std::io::stdout()),
        ReportMode::Json => Box::new(std::io::stderr()),
    };
    let mut out = std::io::stdout();

    if let Err(err) = run(&config, &mut input, &mut prompts, &mut out) {
        match err {
            RunError::Load(_) => println!("{err}"),
            _ => eprintln!("{err}"),
        }
        std::process::exit(1);
    }
}

fn run<R, P, O>(
    config: &RunConfig,
    input: &mut R,
    prompts: &mut P,
    out: &mut O,
) -> Result<(), RunError>
where
    R: BufRead,
    P: Write,
    O: Write,
{
    let stage1 = run_stage1(&config.results_path)?;
    write_results_echo(&stage1.results, prompts)?;

    let stage2 = Stage2Params {
        players: config.players,
    };
    let mut players = run_stage2(&stage2, input, prompts)?;

    let stage3 = run_stage3(&mut players, &stage1.results, &PointsTable::standard());
    let leaderboard = run_stage4(players, stage3.breakdowns);

    write_reports(&stage1.results, &leaderboard, config.report_mode, out)?;
    Ok(())
}

fn parse_player_count(raw: &str) -> Result<usize, String> {
    let n: usize = raw
        .parse()
        .map_err(|_| format!("invalid player count: {raw}"))?;
    if n == 0 {
        return Err("at least one player is required".to_string());
    }
    Ok(n)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
