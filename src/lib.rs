pub mod cli;
pub mod config;
pub mod error;
pub mod line_source;
pub mod main_thread;
pub mod relay;
pub mod session;
pub mod transcript;
pub mod utils;

pub use error::{Error, Result};
