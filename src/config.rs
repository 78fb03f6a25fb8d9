use clap::Parser;

use crate::reader::DEFAULT_CHUNK_SIZE;

/// Interactive console for a device speaking a line-oriented command protocol over TCP.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct Config {
    /// Device address (IP or hostname).
    #[arg(long, env = "DEVICE_HOST", default_value = "172.20.10.3")]
    pub host: String,

    /// Device TCP port.
    #[arg(short, long, env = "DEVICE_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Maximum number of bytes taken from the socket per receive.
    #[arg(
        long,
        env = "DEVICE_CHUNK_SIZE",
        default_value_t = DEFAULT_CHUNK_SIZE as u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub chunk_size: u32,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_device() {
        let config = Config::try_parse_from(["device-console"]).unwrap();
        assert_eq!(config.host, "172.20.10.3");
        assert_eq!(config.port, 3333);
        assert_eq!(config.chunk_size(), 1024);
        assert_eq!(config.addr(), "172.20.10.3:3333");
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "device-console",
            "--host",
            "127.0.0.1",
            "-p",
            "4000",
            "--chunk-size",
            "16",
        ])
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:4000");
        assert_eq!(config.chunk_size(), 16);
    }

    #[test]
    fn zero_chunk_size_rejected() {
        assert!(Config::try_parse_from(["device-console", "--chunk-size", "0"]).is_err());
    }

    #[test]
    fn port_out_of_range_rejected() {
        assert!(Config::try_parse_from(["device-console", "--port", "70000"]).is_err());
    }
}
