use crate::{
    cli::Cli,
    config::{
        ports::{available_ports, print_ports, user_select_port},
        SessionConfig,
    },
    error::{Error, Result},
    line_source::{EditorSource, LineSource, ReaderSource},
    relay::{Relay, RelayStats, KNOWN_COMMANDS},
    session::PortSession,
    transcript::Transcript,
};
use std::{
    io::{self, IsTerminal},
    path::Path,
};

/// Open the port, then relay `source` into it.
///
/// Nothing is read from `source` unless the port opened.
pub fn open_and_relay<S: LineSource>(
    cfg: &SessionConfig,
    source: S,
    log_dir: Option<&Path>,
    banner: bool,
) -> Result<RelayStats> {
    let session = PortSession::open(cfg)?;

    let mut relay = Relay::new(source, session);
    if let Some(dir) = log_dir {
        let name = Path::new(&cfg.port_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("uartconsole");
        relay = relay.with_transcript(Transcript::create(dir, name, &cfg.port_name)?);
    }
    if banner {
        println!(
            "Console Control: type commands ({})",
            KNOWN_COMMANDS.join(", ")
        );
    }
    relay.run()
}

pub fn main_task(cli: Cli) -> Result<()> {
    if cli.list {
        print_ports(&available_ports()?);
        return Ok(());
    }

    let interactive = io::stdin().is_terminal();
    let file_config = cli.file_config()?;
    let port_name = match cli.port_name(file_config.as_ref()) {
        Some(port_name) => port_name,
        None if interactive => match user_select_port(&available_ports()?)? {
            Some(port_name) => port_name,
            None => {
                log::info!("[main_task] no port selected");
                return Ok(());
            }
        },
        None => return Err(Error::config("no port given, use --port or --config")),
    };
    let cfg = cli.resolve(port_name, file_config);

    if let Some(path) = &cli.save_config {
        cfg.save_config_file(path)?;
    }

    let log_dir = cli.log_dir.as_deref();
    let stats = if interactive {
        open_and_relay(&cfg, EditorSource::new(&cli.history), log_dir, true)?
    } else {
        open_and_relay(&cfg, ReaderSource::new(io::stdin().lock()), log_dir, false)?
    };

    log::info!(
        "[main_task] end, {} bytes sent to {}",
        stats.bytes_written,
        cfg.port_name
    );
    Ok(())
}
