use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod results;
pub mod source;

use results::parse_results;
use source::open_maybe_gz;

use crate::model::race::RaceResult;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Open { path, .. } | LoadError::Read { path, .. } => path,
        }
    }
}

pub fn load_results(path: &Path) -> Result<RaceResult, LoadError> {
    let reader = open_maybe_gz(path)?;
    let results = parse_results(reader, path)?;

    tracing::info!(
        path = %path.display(),
        riders = results.len(),
        "loaded race results"
    );
    if results.is_empty() {
        tracing::warn!(
            "results source {} is empty; no rider can score",
            path.display()
        );
    }

    Ok(results)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
