//! Line-oriented configuration parser.
//!
//! The input is a lawn line followed by any number of mower / instruction
//! line pairs:
//!
//! ```text
//! 55
//! 12N
//! LFRFF
//! ```
//!
//! [`handle_line`] is the whole transition table and does no I/O;
//! [`ConfigurationParser`] adds line numbering and the completion signal.

use crate::domain::model::{Instruction, Lawn, Mower, Orientation};
use crate::utils::error::{ParseError, ParseErrorKind};
use regex::Regex;
use std::sync::LazyLock;

static LAWN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]{2}$").expect("lawn pattern is valid"));
static MOWER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]{2}[NSEW]$").expect("mower pattern is valid"));
static INSTRUCTIONS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[LRF]+$").expect("instruction pattern is valid"));

/// A mower ready to run, with its instructions in input order. The mower has not moved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub mower: Mower,
    pub instructions: Vec<Instruction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserState {
    AwaitingLawn,
    AwaitingMowerInitial { lawn: Lawn },
    AwaitingMowerInstructions { lawn: Lawn, mower: Mower },
    Failed(ParseErrorKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    BatchReady(Batch),
    Error(ParseErrorKind),
    /// The parser already failed; the line was not looked at.
    Halted,
}

fn digit(c: char) -> Option<u32> {
    c.to_digit(10)
}

pub fn parse_lawn(line: &str) -> Option<Lawn> {
    if !LAWN_REGEX.is_match(line) {
        return None;
    }
    let mut chars = line.chars();
    let width = chars.next().and_then(digit)?;
    let height = chars.next().and_then(digit)?;
    Lawn::new(width, height).ok()
}

/// Parses a mower-initial line. A well-formed line placing the mower
/// outside `lawn` is rejected as well.
pub fn parse_mower(line: &str, lawn: Lawn) -> Option<Mower> {
    if !MOWER_REGEX.is_match(line) {
        return None;
    }
    let mut chars = line.chars();
    let x = chars.next().and_then(digit)?;
    let y = chars.next().and_then(digit)?;
    let orientation = chars.next().and_then(Orientation::from_letter)?;
    Mower::new(x, y, orientation, lawn).ok()
}

pub fn parse_instructions(line: &str) -> Option<Vec<Instruction>> {
    if !INSTRUCTIONS_REGEX.is_match(line) {
        return None;
    }
    line.chars().map(Instruction::from_letter).collect()
}

pub fn handle_line(state: ParserState, line: &str) -> (ParserState, LineOutcome) {
    match state {
        ParserState::AwaitingLawn => match parse_lawn(line) {
            Some(lawn) => (
                ParserState::AwaitingMowerInitial { lawn },
                LineOutcome::Continue,
            ),
            None => fail(ParseErrorKind::Lawn),
        },
        ParserState::AwaitingMowerInitial { lawn } => match parse_mower(line, lawn) {
            Some(mower) => (
                ParserState::AwaitingMowerInstructions { lawn, mower },
                LineOutcome::Continue,
            ),
            None => fail(ParseErrorKind::Mower),
        },
        ParserState::AwaitingMowerInstructions { lawn, mower } => {
            match parse_instructions(line) {
                Some(instructions) => (
                    ParserState::AwaitingMowerInitial { lawn },
                    LineOutcome::BatchReady(Batch {
                        mower,
                        instructions,
                    }),
                ),
                None => fail(ParseErrorKind::Instruction),
            }
        }
        failed @ ParserState::Failed(_) => (failed, LineOutcome::Halted),
    }
}

fn fail(kind: ParseErrorKind) -> (ParserState, LineOutcome) {
    (ParserState::Failed(kind), LineOutcome::Error(kind))
}

/// Summary handed out once parsing is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCompletion {
    pub lines_read: usize,
    pub batches: usize,
    /// A mower line was read but the input ended before its instructions.
    pub trailing_mower: Option<Mower>,
    pub error: Option<ParseError>,
}

impl ParseCompletion {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

pub struct ConfigurationParser {
    state: ParserState,
    line_number: usize,
    batches: usize,
    error: Option<ParseError>,
}

impl ConfigurationParser {
    pub fn new() -> Self {
        Self {
            state: ParserState::AwaitingLawn,
            line_number: 0,
            batches: 0,
            error: None,
        }
    }

    pub fn state(&self) -> &ParserState {
        &self.state
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, ParserState::Failed(_))
    }

    /// Consumes the next line. The first malformed line yields its error,
    /// after which every further line is ignored.
    pub fn feed(&mut self, line: &str) -> Result<Option<Batch>, ParseError> {
        if self.is_failed() {
            return Ok(None);
        }
        self.line_number += 1;

        let state = std::mem::replace(&mut self.state, ParserState::AwaitingLawn);
        let (next, outcome) = handle_line(state, line);
        self.state = next;

        match outcome {
            LineOutcome::Continue => {
                tracing::debug!("Line {} accepted: {:?}", self.line_number, line);
                Ok(None)
            }
            // 失敗狀態在上面已提前返回，不會走到這裡
            LineOutcome::Halted => Ok(None),
            LineOutcome::BatchReady(batch) => {
                self.batches += 1;
                tracing::debug!(
                    "Line {} completes mower #{} with {} instructions",
                    self.line_number,
                    self.batches,
                    batch.instructions.len()
                );
                Ok(Some(batch))
            }
            LineOutcome::Error(kind) => {
                let error = ParseError {
                    kind,
                    line: self.line_number,
                };
                tracing::debug!("Line {} rejected: {:?}", self.line_number, line);
                self.error = Some(error);
                Err(error)
            }
        }
    }

    pub fn finish(self) -> ParseCompletion {
        let trailing_mower = match self.state {
            ParserState::AwaitingMowerInstructions { mower, .. } => Some(mower),
            _ => None,
        };
        ParseCompletion {
            lines_read: self.line_number,
            batches: self.batches,
            trailing_mower,
            error: self.error,
        }
    }
}

impl Default for ConfigurationParser {
    fn default() -> Self {
        Self::new()
    }
}
