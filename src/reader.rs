//! Background loop printing whatever the device sends.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::error::ConsoleError;

/// Marks text that came from the device rather than from the operator.
pub const INCOMING_PREFIX: &str = "[收到消息]: ";

/// Default receive size.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Why the reader loop stopped.
#[derive(Debug)]
pub enum ReadOutcome {
    /// The peer closed its side (zero-byte read).
    PeerClosed,
    /// A receive or decode error ended the loop.
    Failed(ConsoleError),
}

/// Decodes one receive chunk into the line shown to the operator.
pub fn format_incoming(chunk: &[u8]) -> Result<String, ConsoleError> {
    let text = std::str::from_utf8(chunk)?;
    Ok(format!("\n{}{}\n", INCOMING_PREFIX, text.trim_end()))
}

/// Reads from `reader` until the peer closes or an error occurs, printing each
/// chunk to `console`. Errors are printed and contained here.
pub async fn read_loop<R, W>(mut reader: R, mut console: W, chunk_size: usize) -> ReadOutcome
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buffer = vec![0; chunk_size.max(1)];

    let err = loop {
        let n = match reader.read(&mut buffer).await {
            Ok(0) => {
                debug!("peer closed connection");
                return ReadOutcome::PeerClosed;
            }
            Ok(n) => n,
            Err(e) => break ConsoleError::Receive(e),
        };
        debug!(bytes = n, "received");

        match format_incoming(&buffer[..n]) {
            Ok(line) => emit(&mut console, &line).await,
            Err(e) => break e,
        }
    };

    emit(&mut console, &format!("接收出错: {}\n", err)).await;
    ReadOutcome::Failed(err)
}

async fn emit<W: AsyncWrite + Unpin>(console: &mut W, text: &str) {
    let result = async {
        console.write_all(text.as_bytes()).await?;
        console.flush().await
    }
    .await;

    if let Err(e) = result {
        warn!("failed to write to console; err = {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incoming_is_prefixed_and_right_trimmed() {
        let line = format_incoming(b"BOOT button pressed\r\n").unwrap();
        assert_eq!(line, "\n[收到消息]: BOOT button pressed\n");
    }

    #[test]
    fn leading_whitespace_is_kept() {
        let line = format_incoming(b"  ok  \n").unwrap();
        assert_eq!(line, "\n[收到消息]:   ok\n");
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let err = format_incoming(&[0x66, 0xff, 0x66]).unwrap_err();
        assert!(matches!(err, ConsoleError::Decode(_)));
    }

    #[tokio::test]
    async fn prints_each_chunk_then_stops_on_eof() {
        let mut out: Vec<u8> = Vec::new();
        let outcome = read_loop(&b"LED on\n"[..], &mut out, DEFAULT_CHUNK_SIZE).await;

        assert!(matches!(outcome, ReadOutcome::PeerClosed));
        assert_eq!(String::from_utf8(out).unwrap(), "\n[收到消息]: LED on\n");
    }

    #[tokio::test]
    async fn chunk_size_bounds_each_print() {
        let mut out: Vec<u8> = Vec::new();
        let outcome = read_loop(&b"abcdef"[..], &mut out, 4).await;

        assert!(matches!(outcome, ReadOutcome::PeerClosed));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n[收到消息]: abcd\n\n[收到消息]: ef\n"
        );
    }

    #[tokio::test]
    async fn decode_error_is_printed_and_ends_loop() {
        let mut out: Vec<u8> = Vec::new();
        let outcome = read_loop(&[0xffu8, 0xfe][..], &mut out, DEFAULT_CHUNK_SIZE).await;

        assert!(matches!(outcome, ReadOutcome::Failed(ConsoleError::Decode(_))));
        assert!(String::from_utf8(out).unwrap().starts_with("接收出错: "));
    }
}
