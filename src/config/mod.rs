pub mod ports;
pub mod read_config;

use std::time::Duration;

pub type BaudRate = u32;
pub const DEFAULT_BAUD_RATE: BaudRate = 115_200;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(100);
pub const DEFAULT_WRITE_DELAY: Duration = Duration::from_millis(50);
// boards that reset on DTR need a moment before they accept commands
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(1);

/// Everything needed to open a port session and pace the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub port_name: String,
    pub baud_rate: BaudRate,
    pub timeout: Duration,
    pub write_delay: Duration,
    pub settle_delay: Duration,
}

impl SessionConfig {
    pub fn new(port_name: impl Into<String>) -> Self {
        Self {
            port_name: port_name.into(),
            baud_rate: DEFAULT_BAUD_RATE,
            timeout: DEFAULT_TIMEOUT,
            write_delay: DEFAULT_WRITE_DELAY,
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    pub fn with_baud_rate(mut self, baud_rate: BaudRate) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_write_delay(mut self, write_delay: Duration) -> Self {
        self.write_delay = write_delay;
        self
    }

    pub fn with_settle_delay(mut self, settle_delay: Duration) -> Self {
        self.settle_delay = settle_delay;
        self
    }
}
