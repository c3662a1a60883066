use std::cmp::Ordering;

use crate::model::{Player, ScoreBreakdown};

pub const PODIUM_SIZE: usize = 3;

#[derive(Debug, Clone)]
pub struct Standing {
    pub player: Player,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone)]
pub struct Leaderboard {
    pub standings: Vec<Standing>,
}

impl Leaderboard {
    pub fn podium(&self) -> &[Standing] {
        let n = self.standings.len().min(PODIUM_SIZE);
        &self.standings[..n]
    }
}

pub fn run_stage4(players: Vec<Player>, breakdowns: Vec<ScoreBreakdown>) -> Leaderboard {
    let standings = players
        .into_iter()
        .zip(breakdowns)
        .map(|(player, breakdown)| Standing { player, breakdown })
        .collect();
    let leaderboard = rank_standings(standings);

    if let Some(leader) = leaderboard.standings.first() {
        tracing::info!(
            players = leaderboard.standings.len(),
            leader = %leader.player.name,
            score = leader.player.score,
            "ranked players"
        );
    }

    leaderboard
}

// Stable sort: exact ties keep entry order.
pub fn rank_standings(mut standings: Vec<Standing>) -> Leaderboard {
    standings.sort_by(|a, b| compare_players(&a.player, &b.player));
    Leaderboard { standings }
}

pub fn compare_players(a: &Player, b: &Player) -> Ordering {
    match b.score.cmp(&a.score) {
        Ordering::Equal => a.wildcard_position().cmp(&b.wildcard_position()),
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_rank.rs"]
mod tests;
