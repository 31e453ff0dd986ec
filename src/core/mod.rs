pub mod parser;
pub mod processor;
pub mod run;

pub use crate::domain::model::{Instruction, Lawn, Mower, MowerReport, Orientation};
pub use crate::domain::ports::LineWriter;
pub use crate::utils::error::Result;
