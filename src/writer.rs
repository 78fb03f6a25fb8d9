//! Foreground loop forwarding operator lines to the device.

use futures::{Stream, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tokio_util::codec::{FramedRead, LinesCodec, LinesCodecError};
use tracing::debug;

use crate::error::ConsoleError;

/// Frames a console source into lines. Terminators are stripped.
pub fn console_lines<R: AsyncRead>(input: R) -> FramedRead<R, LinesCodec> {
    FramedRead::new(input, LinesCodec::new())
}

/// Sends each non-empty line from `lines` to `writer` as its exact bytes,
/// with no terminator added. Runs until something fails; running out of
/// console input is `ConsoleError::InputClosed`.
pub async fn write_loop<L, W>(mut lines: L, mut writer: W) -> Result<(), ConsoleError>
where
    L: Stream<Item = Result<String, LinesCodecError>> + Unpin,
    W: AsyncWrite + Unpin,
{
    while let Some(line) = lines.next().await {
        let line = line?;
        if line.is_empty() {
            continue;
        }

        writer
            .write_all(line.as_bytes())
            .await
            .map_err(ConsoleError::Send)?;
        debug!(bytes = line.len(), "sent");
    }

    Err(ConsoleError::InputClosed)
}
