use crate::model::RaceResult;
use crate::pipeline::stage4_rank::Leaderboard;
use crate::report::format_points;

pub fn render_results_text(results: &RaceResult) -> String {
    let mut out = String::new();
    out.push_str("Race Results:\n");
    for (position, rider) in results.iter() {
        out.push_str(&format!("{position}: {rider}\n"));
    }
    out
}

pub fn render_leaderboard_text(leaderboard: &Leaderboard) -> String {
    let mut out = String::new();

    out.push_str("\nLeaderboard:\n");
    for standing in &leaderboard.standings {
        out.push_str(&format!(
            "{}: {}\n",
            standing.player.name,
            format_points(standing.player.score)
        ));
    }

    out.push_str("\nPodium:\n");
    for (idx, standing) in leaderboard.podium().iter().enumerate() {
        out.push_str(&format!(
            "{}. {} with {}\n",
            idx + 1,
            standing.player.name,
            format_points(standing.player.score)
        ));
    }

    out
}
