// Common Baud Rates:
// 110, 300, 600, 1200, 2400, 4800, 9600, 14400,
// 19200, 38400, 57600, 115200, 128000 and 256000

use clap::Parser;
use std::process::ExitCode;
use uartconsole::{cli::Cli, main_thread::main_task};

pub fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match main_task(Cli::parse()) {
        Err(e) => {
            eprintln!("> [main] error {}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
