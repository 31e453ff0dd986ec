use crate::utils::error::Result;
use async_trait::async_trait;

/// Destination for whole output lines (results on one side, diagnostics on the other).
#[async_trait]
pub trait LineWriter: Send {
    async fn write_line(&mut self, line: &str) -> Result<()>;

    async fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl<W: LineWriter + ?Sized> LineWriter for &mut W {
    async fn write_line(&mut self, line: &str) -> Result<()> {
        (**self).write_line(line).await
    }

    async fn flush(&mut self) -> Result<()> {
        (**self).flush().await
    }
}

#[async_trait]
impl LineWriter for Vec<String> {
    async fn write_line(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}
