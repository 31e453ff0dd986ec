use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// 解析錯誤的類型，對應輸入檔案中預期的行種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    Lawn,
    Mower,
    Instruction,
}

impl ParseErrorKind {
    fn subject(self) -> &'static str {
        match self {
            ParseErrorKind::Lawn => "lawn data",
            ParseErrorKind::Mower => "mower initial data",
            ParseErrorKind::Instruction => "mower instructions",
        }
    }
}

/// A malformed line, located by its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line {} - An error occurred while parsing {}.",
            self.line,
            self.kind.subject()
        )
    }
}

impl std::error::Error for ParseError {}

#[derive(Error, Debug)]
pub enum KataError {
    #[error("No input file given")]
    MissingFileArg,

    #[error("An error occurred while trying to open the file {}. (file does not exist)", path.display())]
    FileDoesNotExist { path: PathBuf },

    #[error("An error occurred while trying to open the file {}. ({source})", path.display())]
    FileNotReadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("Mower position ({x}, {y}) is outside of the {width}x{height} lawn")]
    OutOfLawn {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Parse,
    Validation,
    Technical,
}

impl KataError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KataError::MissingFileArg
            | KataError::FileDoesNotExist { .. }
            | KataError::FileNotReadable { .. } => ErrorCategory::Input,
            KataError::Parse(_) => ErrorCategory::Parse,
            KataError::OutOfLawn { .. } | KataError::InvalidValue { .. } => {
                ErrorCategory::Validation
            }
            KataError::IoError(_) | KataError::SerializationError(_) => ErrorCategory::Technical,
        }
    }

    /// 對應到程序的退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            KataError::MissingFileArg => 1,
            KataError::FileDoesNotExist { .. } => 2,
            KataError::FileNotReadable { .. } => 3,
            KataError::Parse(e) => match e.kind {
                ParseErrorKind::Lawn => 4,
                ParseErrorKind::Mower => 5,
                ParseErrorKind::Instruction => 6,
            },
            // 解析器已把越界轉成 Mower 錯誤，這裡只剩非預期情況
            KataError::OutOfLawn { .. }
            | KataError::InvalidValue { .. }
            | KataError::IoError(_)
            | KataError::SerializationError(_) => 7,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KataError::MissingFileArg => "Pass the path of the configuration file as first argument",
            KataError::FileDoesNotExist { .. } => "Check the file path for typos",
            KataError::FileNotReadable { .. } => {
                "Make sure the path is a regular file and that you have read permission"
            }
            KataError::Parse(e) => match e.kind {
                ParseErrorKind::Lawn => "The first line must be two digits 1-9, e.g. '55'",
                ParseErrorKind::Mower => {
                    "A mower line is two digits 1-9 and one of N/S/E/W, inside the lawn, e.g. '12N'"
                }
                ParseErrorKind::Instruction => "An instruction line only contains L, R and F",
            },
            KataError::OutOfLawn { .. } => "Place the mower inside the lawn bounds",
            KataError::InvalidValue { .. } => "Check the value and try again",
            KataError::IoError(_) | KataError::SerializationError(_) => {
                "This is unexpected; rerun with --verbose and report the log"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;
