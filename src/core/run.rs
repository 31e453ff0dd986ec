use crate::config::OutputFormat;
use crate::core::processor::{ConfigurationProcessor, ProcessSummary};
use crate::domain::ports::LineWriter;
use crate::utils::error::{KataError, Result};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs::File;
use tokio::io::BufReader;

/// Opens the input file for reading, or says why it cannot be used.
pub async fn check_input(path: &Path) -> Result<File> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(KataError::FileDoesNotExist {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(KataError::FileNotReadable {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if !metadata.is_file() {
        return Err(KataError::FileNotReadable {
            path: path.to_path_buf(),
            source: std::io::Error::new(ErrorKind::InvalidInput, "not a regular file"),
        });
    }

    File::open(path)
        .await
        .map_err(|source| KataError::FileNotReadable {
            path: path.to_path_buf(),
            source,
        })
}

/// Runs every mower of the file at `path`.
///
/// Pre-flight failures are written to `err` and returned without touching
/// the parser; parse failures are written by the processor.
pub async fn run_mower_kata<O, E>(
    path: &Path,
    format: OutputFormat,
    out: O,
    mut err: E,
) -> Result<ProcessSummary>
where
    O: LineWriter,
    E: LineWriter,
{
    tracing::info!("📁 Reading configuration from: {}", path.display());

    let file = match check_input(path).await {
        Ok(file) => file,
        Err(e) => {
            tracing::debug!("Pre-flight check failed: {:?}", e);
            err.write_line(&e.to_string()).await?;
            err.flush().await?;
            return Err(e);
        }
    };

    let mut processor = ConfigurationProcessor::with_format(out, err, format);
    processor.process(BufReader::new(file)).await
}
