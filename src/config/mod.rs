pub mod cli;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `13N`
    #[default]
    Text,
    /// `{"x":1,"y":3,"orientation":"N"}`
    Json,
}

#[cfg(feature = "cli")]
mod args {
    use super::OutputFormat;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_path, validate_required_file, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};
    use std::path::Path;

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "mower-kata")]
    #[command(about = "Runs lawn mowers from a configuration file and prints their final positions")]
    pub struct CliConfig {
        /// Configuration file: lawn line, then mower / instruction line pairs
        #[arg(value_name = "FILE")]
        pub file: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        pub format: OutputFormat,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON on stderr")]
        pub log_json: bool,
    }

    impl CliConfig {
        /// 已驗證的輸入檔案路徑
        pub fn input_path(&self) -> Result<&Path> {
            let path = validate_required_file(&self.file)?;
            validate_path("file", path)?;
            Ok(Path::new(path))
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            self.input_path().map(|_| ())
        }
    }
}

#[cfg(feature = "cli")]
pub use args::CliConfig;
