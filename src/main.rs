use std::process::ExitCode;

use clap::Parser;
use tokio::runtime::Builder;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use device_console::{console_lines, session, Config, EXIT_NOTICE};

fn main() -> ExitCode {
    let config = Config::parse();

    // RUST_LOG controls verbosity; silent by default so the console stays readable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    let runtime = match Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            println!("通信出错: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = runtime.block_on(session::run(
        &config,
        console_lines(tokio::io::stdin()),
        tokio::io::stdout(),
        session::interrupt(),
    ));

    // The detached reader and the stdin thread may still be parked in a read.
    runtime.shutdown_background();

    match result {
        Ok(()) => {
            println!("{}", EXIT_NOTICE);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("通信出错: {}", e);
            ExitCode::FAILURE
        }
    }
}
