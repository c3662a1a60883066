use crate::model::player::{WILDCARD_MAX, WILDCARD_MIN};
use crate::model::{Player, PointsTable, Prediction, RaceResult, ScoreBreakdown};

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub breakdowns: Vec<ScoreBreakdown>,
}

pub fn run_stage3(
    players: &mut [Player],
    results: &RaceResult,
    table: &PointsTable,
) -> Stage3Output {
    let breakdowns = score_players(players, results, table);
    Stage3Output { breakdowns }
}

pub fn score_players(
    players: &mut [Player],
    results: &RaceResult,
    table: &PointsTable,
) -> Vec<ScoreBreakdown> {
    let mut breakdowns = Vec::with_capacity(players.len());
    for player in players.iter_mut() {
        let breakdown = score_prediction(&player.prediction, results, table);
        player.score = breakdown.total();
        tracing::debug!(
            player = %player.name,
            first = breakdown.first,
            second = breakdown.second,
            third = breakdown.third,
            wildcard = breakdown.wildcard,
            score = player.score,
            "scored prediction"
        );
        breakdowns.push(breakdown);
    }
    breakdowns
}

pub fn score_prediction(
    prediction: &Prediction,
    results: &RaceResult,
    table: &PointsTable,
) -> ScoreBreakdown {
    let position = prediction.wildcard_position.get();
    let wildcard = (WILDCARD_MIN..=WILDCARD_MAX).contains(&position)
        && matches(results, position, &prediction.wildcard_rider);

    ScoreBreakdown {
        first: matches(results, 1, &prediction.first),
        second: matches(results, 2, &prediction.second),
        third: matches(results, 3, &prediction.third),
        wildcard,
        table: *table,
    }
}

fn matches(results: &RaceResult, position: u32, guess: &str) -> bool {
    results.get(position).is_some_and(|rider| rider == guess)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_score.rs"]
mod tests;
