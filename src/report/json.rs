use serde::Serialize;

use crate::model::{RaceResult, ScoreBreakdown, WildcardPosition};
use crate::pipeline::stage4_rank::Leaderboard;

#[derive(Debug, Serialize)]
pub struct SummaryJson<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub race_results: &'a RaceResult,
    pub leaderboard: Vec<LeaderboardEntry<'a>>,
    pub podium: Vec<PodiumEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardEntry<'a> {
    pub name: &'a str,
    pub score: u32,
    pub wildcard_position: WildcardPosition,
    pub breakdown: &'a ScoreBreakdown,
}

#[derive(Debug, Serialize)]
pub struct PodiumEntry<'a> {
    pub rank: usize,
    pub name: &'a str,
    pub score: u32,
}

pub fn build_summary<'a>(
    results: &'a RaceResult,
    leaderboard: &'a Leaderboard,
) -> SummaryJson<'a> {
    let entries = leaderboard
        .standings
        .iter()
        .map(|s| LeaderboardEntry {
            name: &s.player.name,
            score: s.player.score,
            wildcard_position: s.player.wildcard_position(),
            breakdown: &s.breakdown,
        })
        .collect();
    let podium = leaderboard
        .podium()
        .iter()
        .enumerate()
        .map(|(idx, s)| PodiumEntry {
            rank: idx + 1,
            name: &s.player.name,
            score: s.player.score,
        })
        .collect();

    SummaryJson {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        race_results: results,
        leaderboard: entries,
        podium,
    }
}

pub fn render_summary_json(
    results: &RaceResult,
    leaderboard: &Leaderboard,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&build_summary(results, leaderboard))
}
