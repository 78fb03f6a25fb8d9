pub mod config;
pub mod connection;
pub mod error;
pub mod reader;
pub mod session;
pub mod writer;

pub use config::Config;
pub use connection::Connection;
pub use error::ConsoleError;
pub use reader::{read_loop, ReadOutcome};
pub use session::{drive, interrupt, run, EXIT_NOTICE, USAGE};
pub use writer::{console_lines, write_loop};
