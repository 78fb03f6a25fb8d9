use std::io;
use std::str::Utf8Error;

use thiserror::Error;
use tokio_util::codec::LinesCodecError;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Receive(#[source] io::Error),

    #[error("received bytes are not valid UTF-8: {0}")]
    Decode(#[from] Utf8Error),

    #[error("{0}")]
    Send(#[source] io::Error),

    #[error("failed to read console input: {0}")]
    Input(#[from] LinesCodecError),

    #[error("EOF when reading a line")]
    InputClosed,

    #[error("failed to write to console: {0}")]
    Console(#[source] io::Error),
}
