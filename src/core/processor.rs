use crate::config::OutputFormat;
use crate::core::parser::{Batch, ConfigurationParser};
use crate::domain::model::MowerReport;
use crate::domain::ports::LineWriter;
use crate::utils::error::{KataError, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    pub lines_read: usize,
    pub reports: Vec<MowerReport>,
}

/// Drives the parser over a line stream, runs every mower and writes its final position.
pub struct ConfigurationProcessor<O: LineWriter, E: LineWriter> {
    out: O,
    err: E,
    format: OutputFormat,
}

impl<O: LineWriter, E: LineWriter> ConfigurationProcessor<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self::with_format(out, err, OutputFormat::default())
    }

    pub fn with_format(out: O, err: E, format: OutputFormat) -> Self {
        Self { out, err, format }
    }

    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Returns `KataError::Parse` after writing the diagnostic when a line is malformed.
    /// Mowers completed before that line have already been written.
    pub async fn process<R>(&mut self, reader: R) -> Result<ProcessSummary>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut parser = ConfigurationParser::new();
        let mut reports = Vec::new();
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            // 沒有結尾換行的最後一行可能還帶著 '\r'
            match parser.feed(line.trim_end_matches('\r')) {
                Ok(Some(batch)) => {
                    let report = self.apply(batch).await?;
                    reports.push(report);
                }
                Ok(None) => {}
                Err(parse_error) => {
                    tracing::debug!("Stopping at {:?}", parse_error);
                    self.err.write_line(&parse_error.to_string()).await?;
                    self.err.flush().await?;
                    break;
                }
            }
        }

        let completion = parser.finish();
        self.out.flush().await?;

        if let Some(error) = completion.error {
            return Err(KataError::Parse(error));
        }
        if let Some(mower) = &completion.trailing_mower {
            tracing::warn!(
                "Input ended after mower {}{}{} without instructions, mower ignored",
                mower.x(),
                mower.y(),
                mower.orientation().letter()
            );
        }

        tracing::info!(
            "Processed {} lines, {} mowers",
            completion.lines_read,
            completion.batches
        );
        Ok(ProcessSummary {
            lines_read: completion.lines_read,
            reports,
        })
    }

    async fn apply(&mut self, batch: Batch) -> Result<MowerReport> {
        let Batch {
            mut mower,
            instructions,
        } = batch;
        mower.run(&instructions);

        let report = mower.report();
        let line = match self.format {
            OutputFormat::Text => report.to_string(),
            OutputFormat::Json => serde_json::to_string(&report)?,
        };
        tracing::debug!("Mower finished at {}", report);
        self.out.write_line(&line).await?;
        Ok(report)
    }
}
