use async_trait::async_trait;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use business::domain::product::value_objects::Barcode;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scanner.no_barcode")]
    NoBarcode,
    #[error("scanner.unavailable")]
    Unavailable,
}

/// Scanner seam for the presentation layer. USB HID barcode scanners type
/// the decoded barcode followed by a newline, so a line stream is the
/// scanner surface; a camera-based decoder would implement the same trait.
#[async_trait]
pub trait BarcodeScanner: Send {
    /// Next decoded barcode. `Ok(None)` means the stream ended.
    async fn next_scan(&mut self) -> Result<Option<Barcode>, ScanError>;
}

/// Reads one barcode per line from a buffered async reader.
pub struct LineScanner<R> {
    reader: R,
}

impl LineScanner<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
        }
    }
}

impl<R> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

#[async_trait]
impl<R: AsyncBufRead + Unpin + Send> BarcodeScanner for LineScanner<R> {
    async fn next_scan(&mut self) -> Result<Option<Barcode>, ScanError> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .await
            .map_err(|_| ScanError::Unavailable)?;

        if read == 0 {
            tracing::debug!("scanner stream closed");
            return Ok(None);
        }

        let barcode = line.trim();
        if barcode.is_empty() {
            return Err(ScanError::NoBarcode);
        }

        Ok(Some(Barcode::new(barcode)))
    }
}
