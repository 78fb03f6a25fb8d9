//! One console run: connect, print the menu, then pump both directions.

use std::future::Future;

use futures::Stream;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_util::codec::LinesCodecError;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::connection::Connection;
use crate::error::ConsoleError;
use crate::reader::{read_loop, ReadOutcome};
use crate::writer::write_loop;

/// Usage hint for the operator. The letters mean nothing to this program.
pub const USAGE: &str = "操作说明：
1. 输入 'L'：交替闪烁 LED1/LED2
2. 输入 'F'：电机正转
3. 输入 'R'：电机反转
4. 输入 'S'：电机停止
5. 按下 ESP32 上的 BOOT 键：收到通知
";

pub const EXIT_NOTICE: &str = "\n退出程序";

/// Connects, prints the menu to `console` and runs both loops until
/// `shutdown` resolves (`Ok`) or the writer fails (`Err`, including end of
/// input). `lines` is not touched unless the connect succeeds.
pub async fn run<L, O, S>(
    config: &Config,
    lines: L,
    mut console: O,
    shutdown: S,
) -> Result<(), ConsoleError>
where
    L: Stream<Item = Result<String, LinesCodecError>> + Unpin,
    O: AsyncWrite + Unpin + Send + 'static,
    S: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    show(&mut console, &format!("正在连接到 {} ...\n", config.addr())).await?;
    let connection = tokio::select! {
        connection = Connection::connect(&config.host, config.port) => connection?,
        _ = &mut shutdown => {
            info!("interrupted while connecting");
            return Ok(());
        }
    };
    show(&mut console, &format!("连接成功！\n{}\n", USAGE)).await?;

    drive(connection, lines, console, config.chunk_size(), shutdown).await
}

/// Spawns the reader on `console` and runs the writer on `lines` until it
/// fails or `shutdown` resolves. The reader task is detached, never joined.
pub async fn drive<L, O, S>(
    connection: Connection,
    lines: L,
    console: O,
    chunk_size: usize,
    shutdown: S,
) -> Result<(), ConsoleError>
where
    L: Stream<Item = Result<String, LinesCodecError>> + Unpin,
    O: AsyncWrite + Unpin + Send + 'static,
    S: Future<Output = ()>,
{
    let (reader, writer) = connection.into_split();

    tokio::spawn(async move {
        match read_loop(reader, console, chunk_size).await {
            ReadOutcome::PeerClosed => debug!("reader stopped: peer closed"),
            ReadOutcome::Failed(e) => debug!("reader stopped: {}", e),
        }
    });

    tokio::select! {
        result = write_loop(lines, writer) => result,
        _ = shutdown => {
            info!("interrupted");
            Ok(())
        }
    }
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
pub async fn interrupt() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c; err = {:?}", e);
        futures::future::pending::<()>().await;
    }
}

async fn show<O: AsyncWrite + Unpin>(console: &mut O, text: &str) -> Result<(), ConsoleError> {
    console
        .write_all(text.as_bytes())
        .await
        .map_err(ConsoleError::Console)?;
    console.flush().await.map_err(ConsoleError::Console)
}
