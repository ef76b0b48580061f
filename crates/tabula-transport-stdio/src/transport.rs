//! Line-delimited JSON transport over stdin/stdout.
//!
//! Each JSON-RPC message is a single line terminated by `\n`.
//! This is the framing MCP uses for its stdio transport.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{trace, warn};

use crate::error::TransportError;

/// Reads JSON-RPC messages from a reader, writes responses to a writer.
///
/// Generic over reader/writer for testability. Reading is cancel-safe,
/// so `read_line` may be raced against other futures in `select!`.
pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    /// Bytes of a line not yet terminated; survives a cancelled read.
    pending: Vec<u8>,
    writer: W,
}

impl<R, W> StdioTransport<R, W>
where
    R: tokio::io::AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    /// Creates a new transport with the given reader and writer.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            pending: Vec::new(),
            writer,
        }
    }

    /// Reads the next line, trimmed. Blank lines come back as `""`.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD rather than failing, so a
    /// malformed line reaches the JSON parser like any other garbage.
    /// Returns `None` on EOF (connection closed).
    pub async fn read_line(&mut self) -> Result<Option<String>, TransportError> {
        let read = self
            .reader
            .read_until(b'\n', &mut self.pending)
            .await
            .map_err(|e| TransportError::Read(e.to_string()))?;

        if read == 0 && self.pending.is_empty() {
            return Ok(None);
        }

        let raw = std::mem::take(&mut self.pending);
        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                warn!(len = e.as_bytes().len(), "line is not valid UTF-8");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        let trimmed = line.trim().to_string();
        if !trimmed.is_empty() {
            trace!(len = trimmed.len(), "read message");
        }
        Ok(Some(trimmed))
    }

    /// Writes one message followed by `\n` and flushes.
    pub async fn write_line(&mut self, message: &str) -> Result<(), TransportError> {
        trace!(len = message.len(), "writing message");

        let mut framed = String::with_capacity(message.len() + 1);
        framed.push_str(message);
        framed.push('\n');

        self.writer
            .write_all(framed.as_bytes())
            .await
            .map_err(|e| TransportError::Write(e.to_string()))?;

        self.writer
            .flush()
            .await
            .map_err(|e| TransportError::Write(e.to_string()))
    }
}
