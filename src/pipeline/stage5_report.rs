use std::io::Write;

use crate::model::RaceResult;
use crate::pipeline::stage4_rank::Leaderboard;
use crate::report::json::render_summary_json;
use crate::report::text::{render_leaderboard_text, render_results_text};
use crate::report::{ReportError, ReportMode};

pub fn write_results_echo<W: Write>(results: &RaceResult, out: &mut W) -> Result<(), ReportError> {
    out.write_all(render_results_text(results).as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn write_reports<W: Write>(
    results: &RaceResult,
    leaderboard: &Leaderboard,
    mode: ReportMode,
    out: &mut W,
) -> Result<(), ReportError> {
    match mode {
        ReportMode::Text => out.write_all(render_leaderboard_text(leaderboard).as_bytes())?,
        ReportMode::Json => {
            let json = render_summary_json(results, leaderboard)?;
            writeln!(out, "{json}")?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
