use std::io::{BufRead, Write};

use thiserror::Error;

use crate::model::{Player, Prediction, WildcardPosition};

pub const DEFAULT_PLAYER_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputFormatError {
    #[error("Wildcard position cannot be empty. Please enter a number between 5 and 20.")]
    Empty,
    #[error("Invalid input. Please enter a valid number.")]
    NotANumber,
    #[error("Invalid range. Please enter a number between 5 and 20.")]
    OutOfRange(i32),
}

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("input closed while waiting for {prompt}")]
    InputClosed { prompt: &'static str },
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy)]
pub struct Stage2Params {
    pub players: usize,
}

pub fn run_stage2<R, W>(
    params: &Stage2Params,
    input: &mut R,
    out: &mut W,
) -> Result<Vec<Player>, CollectError>
where
    R: BufRead,
    W: Write,
{
    let mut players = Vec::with_capacity(params.players);
    for index in 1..=params.players {
        players.push(collect_player(index, input, out)?);
    }
    Ok(players)
}

fn collect_player<R, W>(index: usize, input: &mut R, out: &mut W) -> Result<Player, CollectError>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "\nPlayer {index}: Enter your predictions.")?;

    let first = prompt_line(input, out, "Enter your 1st place rider: ")?;
    let second = prompt_line(input, out, "Enter your 2nd place rider: ")?;
    let third = prompt_line(input, out, "Enter your 3rd place rider: ")?;
    let wildcard_position = prompt_wildcard_position(input, out)?;
    let wildcard_rider = prompt_line(input, out, "Enter your wildcard rider: ")?;

    Ok(Player::new(
        format!("Player {index}"),
        Prediction {
            first,
            second,
            third,
            wildcard_position,
            wildcard_rider,
        },
    ))
}

fn prompt_wildcard_position<R, W>(
    input: &mut R,
    out: &mut W,
) -> Result<WildcardPosition, CollectError>
where
    R: BufRead,
    W: Write,
{
    loop {
        let raw = prompt_line(input, out, "Enter your wildcard position (5-20): ")?;
        match parse_wildcard_position(&raw) {
            Ok(position) => return Ok(position),
            Err(err) => {
                tracing::debug!(input = %raw, "rejected wildcard position: {err:?}");
                writeln!(out, "{err}")?;
            }
        }
    }
}

pub fn parse_wildcard_position(raw: &str) -> Result<WildcardPosition, InputFormatError> {
    if raw.is_empty() {
        return Err(InputFormatError::Empty);
    }
    let value: i32 = raw.parse().map_err(|_| InputFormatError::NotANumber)?;
    u32::try_from(value)
        .ok()
        .and_then(WildcardPosition::new)
        .ok_or(InputFormatError::OutOfRange(value))
}

fn prompt_line<R, W>(
    input: &mut R,
    out: &mut W,
    prompt: &'static str,
) -> Result<String, CollectError>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut bytes = Vec::new();
    let read = input.read_until(b'\n', &mut bytes)?;
    if read == 0 {
        return Err(CollectError::InputClosed {
            prompt: prompt.trim_end().trim_end_matches(':'),
        });
    }
    strip_line_ending(&mut bytes);
    // Undecodable bytes become U+FFFD instead of ending the session.
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn strip_line_ending(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_predictions.rs"]
mod tests;
