use thiserror::Error;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportMode {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn format_points(score: u32) -> String {
    format!("{score} points")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
