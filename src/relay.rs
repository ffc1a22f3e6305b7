use crate::{
    error::Result, line_source::LineSource, session::PortSession, transcript::Transcript,
};
use std::{io::Write, thread, time::Duration};

/// Commands the player firmware understands. Shown to the user, never enforced.
pub const KNOWN_COMMANDS: [&str; 5] = ["play", "pause", "test", "reset", "exit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayState {
    Reading,
    Terminated,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RelayStats {
    pub lines_written: usize,
    pub lines_skipped: usize,
    pub bytes_written: usize,
}

/// Bytes to put on the wire for one input line, or `None` for a blank line.
pub fn frame_line(line: &str) -> Option<Vec<u8>> {
    let cmd = line.trim();
    if cmd.is_empty() {
        return None;
    }
    let mut bytes = Vec::with_capacity(cmd.len() + 1);
    bytes.extend_from_slice(cmd.as_bytes());
    bytes.push(b'\n');
    Some(bytes)
}

/// Forwards lines from a source to a port session until the source ends.
pub struct Relay<S: LineSource, C: Write> {
    source: S,
    session: PortSession<C>,
    transcript: Option<Transcript>,
    write_delay: Duration,
    state: RelayState,
    stats: RelayStats,
}

impl<S: LineSource, C: Write> Relay<S, C> {
    pub fn new(source: S, session: PortSession<C>) -> Self {
        let write_delay = session.config().write_delay;
        Self {
            source,
            session,
            transcript: None,
            write_delay,
            state: RelayState::Reading,
            stats: RelayStats::default(),
        }
    }

    pub fn with_transcript(mut self, transcript: Transcript) -> Self {
        self.transcript = Some(transcript);
        self
    }

    pub fn state(&self) -> RelayState {
        self.state
    }

    pub fn stats(&self) -> RelayStats {
        self.stats
    }

    pub fn run(&mut self) -> Result<RelayStats> {
        while self.state == RelayState::Reading {
            if let Err(e) = self.step() {
                self.state = RelayState::Terminated;
                log::error!("[relay] stopped: {}", e);
                return Err(e);
            }
        }
        log::info!(
            "[relay] end, {} lines written, {} skipped",
            self.stats.lines_written,
            self.stats.lines_skipped
        );
        Ok(self.stats)
    }

    fn step(&mut self) -> Result<()> {
        let line = match self.source.next_line()? {
            Some(line) => line,
            None => {
                self.state = RelayState::Terminated;
                return Ok(());
            }
        };
        let bytes = match frame_line(&line) {
            Some(bytes) => bytes,
            None => {
                self.stats.lines_skipped += 1;
                return Ok(());
            }
        };

        self.session.write(&bytes)?;
        self.stats.lines_written += 1;
        self.stats.bytes_written += bytes.len();
        log::debug!("[relay] wrote {:?}", line.trim());

        if let Some(transcript) = &mut self.transcript {
            transcript.record(line.trim())?;
        }
        if !self.write_delay.is_zero() {
            thread::sleep(self.write_delay);
        }
        Ok(())
    }
}
