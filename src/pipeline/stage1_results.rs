use std::path::Path;

use crate::input::{LoadError, load_results};
use crate::model::RaceResult;

#[derive(Debug)]
pub struct Stage1Output {
    pub results: RaceResult,
}

pub fn run_stage1(results_path: &Path) -> Result<Stage1Output, LoadError> {
    let results = load_results(results_path)?;
    Ok(Stage1Output { results })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_results.rs"]
mod tests;
