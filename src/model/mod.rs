pub mod player;
pub mod points;
pub mod race;

pub use player::{Player, Prediction, WildcardPosition};
pub use points::{PointsTable, ScoreBreakdown};
pub use race::RaceResult;

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
