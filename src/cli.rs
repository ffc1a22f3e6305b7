use crate::{
    config::{BaudRate, SessionConfig},
    error::Result,
};
use clap::Parser;
use std::{path::PathBuf, time::Duration};

pub const DEFAULT_HISTORY_PATH: &str = "uartconsole_history.txt";

/// Relay lines typed on stdin to a serial port.
///
/// Every non-blank line is trimmed, terminated with a newline and written to the
/// port. Input ends at end of stream (Ctrl-D) or Ctrl-C.
#[derive(Parser, Debug)]
#[command(name = "uartconsole")]
#[command(version)]
pub struct Cli {
    /// Serial port path (e.g. /dev/ttyUSB0, COM5)
    #[arg(short, long)]
    pub port: Option<String>,

    /// Baud rate [default: 115200]
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub baud: Option<BaudRate>,

    /// Serial read timeout in milliseconds [default: 100]
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Pause after each write in milliseconds [default: 50]
    #[arg(long)]
    pub write_delay_ms: Option<u64>,

    /// Pause after opening the port in milliseconds [default: 1000]
    #[arg(long)]
    pub settle_delay_ms: Option<u64>,

    /// Read session settings from a .json file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the resolved session settings to a .json file
    #[arg(long)]
    pub save_config: Option<PathBuf>,

    /// Keep a timestamped transcript of sent commands in this directory
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Line editor history file
    #[arg(long, default_value = DEFAULT_HISTORY_PATH)]
    pub history: PathBuf,

    /// List available serial ports and exit
    #[arg(short, long)]
    pub list: bool,
}

impl Cli {
    /// Settings from `--config`, if one was given.
    pub fn file_config(&self) -> Result<Option<SessionConfig>> {
        match &self.config {
            Some(path) => Ok(Some(SessionConfig::read_config_file(path)?)),
            None => Ok(None),
        }
    }

    /// Port named on the command line, else the one from the config file.
    pub fn port_name(&self, file_config: Option<&SessionConfig>) -> Option<String> {
        self.port
            .clone()
            .or_else(|| file_config.map(|cfg| cfg.port_name.clone()))
    }

    /// Flags win over the config file, which wins over defaults.
    pub fn resolve(&self, port_name: String, file_config: Option<SessionConfig>) -> SessionConfig {
        let mut cfg = match file_config {
            Some(cfg) => SessionConfig { port_name, ..cfg },
            None => SessionConfig::new(port_name),
        };
        if let Some(baud) = self.baud {
            cfg.baud_rate = baud;
        }
        if let Some(ms) = self.timeout_ms {
            cfg.timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = self.write_delay_ms {
            cfg.write_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = self.settle_delay_ms {
            cfg.settle_delay = Duration::from_millis(ms);
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_without_flags() {
        let cli = Cli::parse_from(["uartconsole", "-p", "COM5"]);
        let port = cli.port_name(None).unwrap();
        assert_eq!(cli.resolve(port, None), SessionConfig::new("COM5"));
        assert_eq!(cli.history, PathBuf::from(DEFAULT_HISTORY_PATH));
        assert!(!cli.list);
    }

    #[test]
    fn flags_override_file() {
        let cli = Cli::parse_from(["uartconsole", "-b", "9600", "--write-delay-ms", "0"]);
        let file = SessionConfig::new("/dev/ttyACM0")
            .with_baud_rate(3_000_000)
            .with_settle_delay(Duration::from_millis(250));

        let port = cli.port_name(Some(&file)).unwrap();
        let cfg = cli.resolve(port, Some(file));

        assert_eq!(cfg.port_name, "/dev/ttyACM0");
        assert_eq!(cfg.baud_rate, 9600);
        assert_eq!(cfg.write_delay, Duration::ZERO);
        assert_eq!(cfg.settle_delay, Duration::from_millis(250));
    }

    #[test]
    fn port_flag_beats_file_port() {
        let cli = Cli::parse_from(["uartconsole", "--port", "COM7"]);
        let file = SessionConfig::new("COM5");
        assert_eq!(cli.port_name(Some(&file)).as_deref(), Some("COM7"));
    }

    #[test]
    fn zero_baud_is_rejected() {
        assert!(Cli::try_parse_from(["uartconsole", "-p", "COM5", "-b", "0"]).is_err());
        let cli = Cli::try_parse_from(["uartconsole", "-b", "1"]).unwrap();
        assert_eq!(cli.baud, Some(1));
    }

    #[test]
    fn no_port_anywhere() {
        let cli = Cli::parse_from(["uartconsole"]);
        assert_eq!(cli.port_name(None), None);
    }
}
