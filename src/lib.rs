pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::StreamWriter, OutputFormat};
pub use crate::core::{
    parser::{handle_line, Batch, ConfigurationParser, LineOutcome, ParserState},
    processor::{ConfigurationProcessor, ProcessSummary},
    run::{check_input, run_mower_kata},
};
pub use crate::domain::model::{Instruction, Lawn, Mower, MowerReport, Orientation};
pub use crate::domain::ports::LineWriter;
pub use crate::utils::error::{KataError, ParseError, ParseErrorKind, Result};
