use std::net::SocketAddr;

use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::error::ConsoleError;

/// The single duplex stream to the remote device.
#[derive(Debug)]
pub struct Connection {
    stream: TcpStream,
    peer: SocketAddr,
}

impl Connection {
    /// Connects to `host:port`. No timeout and no retry.
    pub async fn connect(host: &str, port: u16) -> Result<Connection, ConsoleError> {
        let addr = format!("{}:{}", host, port);
        debug!(%addr, "connecting");

        let stream = TcpStream::connect(&addr)
            .await
            .map_err(|source| ConsoleError::Connect {
                addr: addr.clone(),
                source,
            })?;
        let peer = stream.peer_addr().map_err(|source| ConsoleError::Connect {
            addr: addr.clone(),
            source,
        })?;

        info!(%peer, "connected");
        Ok(Connection { stream, peer })
    }

    pub fn peer_addr(&self) -> SocketAddr {
        self.peer
    }

    /// Splits into halves that may be driven from separate tasks without locking.
    pub fn into_split(self) -> (OwnedReadHalf, OwnedWriteHalf) {
        self.stream.into_split()
    }
}
