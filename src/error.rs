use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The serial port could not be opened (absent, busy, no permission).
    #[error("cannot open {port_name}: {source}")]
    Connection {
        port_name: String,
        #[source]
        source: serialport::Error,
    },

    #[error("cannot list serial ports: {0}")]
    Enumerate(#[source] serialport::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("config error: {0}")]
    Config(String),

    #[error("config file error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
