use std::io::{BufRead, Read};
use std::path::Path;

use crate::input::LoadError;
use crate::model::race::RaceResult;

pub fn parse_results<R: BufRead>(mut reader: R, path: &Path) -> Result<RaceResult, LoadError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    // Blank lines still take a position so later riders keep theirs.
    let riders = split_lines(&text)
        .into_iter()
        .map(|line| line.trim().to_string());
    Ok(RaceResult::from_finishing_order(riders))
}

// Lines end at "\n", "\r\n" or a lone "\r"; a final terminator adds no line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(idx) => {
                lines.push(&rest[..idx]);
                let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}
