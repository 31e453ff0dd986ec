use crate::domain::ports::LineWriter;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::io::{AsyncWrite, AsyncWriteExt, Stderr, Stdout};

/// `LineWriter` over any async byte sink, one `\n`-terminated line per call.
#[derive(Debug)]
pub struct StreamWriter<W> {
    inner: W,
}

impl<W> StreamWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl StreamWriter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

impl StreamWriter<Stderr> {
    pub fn stderr() -> Self {
        Self::new(tokio::io::stderr())
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> LineWriter for StreamWriter<W> {
    async fn write_line(&mut self, line: &str) -> Result<()> {
        self.inner.write_all(line.as_bytes()).await?;
        self.inner.write_all(b"\n").await?;
        Ok(())
    }

    async fn flush(&mut self) -> Result<()> {
        self.inner.flush().await?;
        Ok(())
    }
}
