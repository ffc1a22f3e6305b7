use crate::{
    config::SessionConfig,
    error::{Error, Result},
};
use serialport::SerialPort;
use std::{
    io::{self, ErrorKind, Write},
    thread,
};

/// An open channel and the settings it was opened with.
///
/// Dropping the session closes the channel.
pub struct PortSession<C: Write> {
    config: SessionConfig,
    channel: C,
}

impl PortSession<Box<dyn SerialPort>> {
    /// Open the configured serial port, then wait out the settle delay.
    pub fn open(config: &SessionConfig) -> Result<Self> {
        let builder =
            serialport::new(config.port_name.as_str(), config.baud_rate).timeout(config.timeout);
        let serial_port = builder.open().map_err(|source| Error::Connection {
            port_name: config.port_name.clone(),
            source,
        })?;
        log::info!(
            "[port_session] opened {} at {} baud",
            config.port_name,
            config.baud_rate
        );
        if !config.settle_delay.is_zero() {
            thread::sleep(config.settle_delay);
        }
        Ok(Self::from_channel(config.clone(), serial_port))
    }
}

impl<C: Write> PortSession<C> {
    pub fn from_channel(config: SessionConfig, channel: C) -> Self {
        Self { config, channel }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Write every byte, then flush.
    ///
    /// The port timeout only bounds reads: a write that times out under
    /// backpressure is resumed, any other error ends the write.
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let mut buf = bytes;
        while !buf.is_empty() {
            match self.channel.write(buf) {
                Ok(0) => {
                    let e = io::Error::new(ErrorKind::WriteZero, "channel accepted no bytes");
                    return Err(e.into());
                }
                Ok(count) => buf = &buf[count..],
                Err(e) if is_retryable(&e) => {
                    log::trace!("[port_session] write stalled: {}", e);
                }
                Err(e) => return Err(e.into()),
            }
        }
        loop {
            match self.channel.flush() {
                Ok(()) => return Ok(()),
                Err(e) if is_retryable(&e) => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    pub fn into_channel(self) -> C {
        self.channel
    }
}

fn is_retryable(e: &io::Error) -> bool {
    matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::Interrupted)
}
