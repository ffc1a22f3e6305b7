use crate::error::Result;
use chrono::{DateTime, Utc};
use std::{
    fs::{create_dir_all, File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

pub const DATE_TIME_FMT: &str = "%y-%m-%d %H:%M:%S%.3f";
pub const FILE_NAME_FMT: &str = "%y%m%d_%H%M%S";

/// Timestamped record of every command sent during a session.
pub struct Transcript {
    file: File,
    file_path: PathBuf,
    port_name: String,
}

impl Transcript {
    pub fn create(dir: &Path, name: &str, port_name: &str) -> Result<Self> {
        create_dir_all(dir)?;
        let file_name = format!("{}_{}.log", name, Utc::now().format(FILE_NAME_FMT));
        let file_path = dir.join(file_name);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_path)?;
        log::info!("[transcript] opened {:?}", file_path);
        Ok(Self {
            file,
            file_path,
            port_name: port_name.to_string(),
        })
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn record(&mut self, command: &str) -> Result<()> {
        self.record_at(Utc::now(), command)
    }

    pub fn record_at(&mut self, instant: DateTime<Utc>, command: &str) -> Result<()> {
        let line = format_line(&self.port_name, instant, command);
        self.file.write_all(line.as_bytes())?;
        self.file.sync_all()?;
        Ok(())
    }
}

pub fn format_line(port_name: &str, instant: DateTime<Utc>, command: &str) -> String {
    format!(
        "{} w {} | {}\r\n",
        port_name,
        instant.format(DATE_TIME_FMT),
        command
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;

    #[test]
    fn line_format() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        assert_eq!(
            format_line("COM5", instant, "play"),
            "COM5 w 24-03-09 14:05:07.000 | play\r\n"
        );
    }

    #[test]
    fn records_append_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");
        let mut transcript = Transcript::create(&log_dir, "board", "COM5").unwrap();
        assert!(transcript.file_path().starts_with(&log_dir));

        transcript.record("play").unwrap();
        transcript.record("pause").unwrap();

        let contents = fs::read_to_string(transcript.file_path()).unwrap();
        let lines: Vec<_> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("COM5 w "));
        assert!(lines[0].ends_with("| play"));
        assert!(lines[1].ends_with("| pause"));
    }
}
