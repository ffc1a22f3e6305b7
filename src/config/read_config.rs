use crate::{
    config::{
        BaudRate, SessionConfig, DEFAULT_BAUD_RATE, DEFAULT_SETTLE_DELAY, DEFAULT_TIMEOUT,
        DEFAULT_WRITE_DELAY,
    },
    error::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::BufReader,
    path::Path,
    time::Duration,
};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct SessionConfigDto {
    port_name: String,
    #[serde(default = "default_baud_rate")]
    baud_rate: BaudRate,
    #[serde(default = "default_timeout_ms")]
    timeout_ms: u64,
    #[serde(default = "default_write_delay_ms")]
    write_delay_ms: u64,
    #[serde(default = "default_settle_delay_ms")]
    settle_delay_ms: u64,
}

fn default_baud_rate() -> BaudRate {
    DEFAULT_BAUD_RATE
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT.as_millis() as u64
}

fn default_write_delay_ms() -> u64 {
    DEFAULT_WRITE_DELAY.as_millis() as u64
}

fn default_settle_delay_ms() -> u64 {
    DEFAULT_SETTLE_DELAY.as_millis() as u64
}

impl SessionConfig {
    fn to_dto(&self) -> SessionConfigDto {
        SessionConfigDto {
            port_name: self.port_name.clone(),
            baud_rate: self.baud_rate,
            timeout_ms: self.timeout.as_millis() as u64,
            write_delay_ms: self.write_delay.as_millis() as u64,
            settle_delay_ms: self.settle_delay.as_millis() as u64,
        }
    }

    pub fn from_dto(dto: SessionConfigDto) -> Result<Self> {
        if dto.port_name.trim().is_empty() {
            return Err(Error::config("empty port_name"));
        }
        if dto.baud_rate == 0 {
            return Err(Error::config("baud_rate must be non-zero"));
        }
        Ok(Self {
            port_name: dto.port_name,
            baud_rate: dto.baud_rate,
            timeout: Duration::from_millis(dto.timeout_ms),
            write_delay: Duration::from_millis(dto.write_delay_ms),
            settle_delay: Duration::from_millis(dto.settle_delay_ms),
        })
    }
}

impl SessionConfig {
    pub fn save_config_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.to_dto())?;
        fs::write(path, contents)?;
        log::info!("[config] saved {:?}", path);
        Ok(())
    }

    pub fn read_config_file(path: &Path) -> Result<Self> {
        if path.is_dir() {
            return Err(Error::config(format!("{:?} is a directory", path)));
        }
        match path.extension() {
            Some(ext) if ext == "json" => {
                let file = File::open(path)?;
                let reader = BufReader::new(file);
                let dto: SessionConfigDto = serde_json::from_reader(reader)?;
                let cfg = Self::from_dto(dto)?;
                log::debug!("[config] read {:?}", path);
                Ok(cfg)
            }
            None => Err(Error::config(format!("{:?} has no extension", path))),
            _ => Err(Error::config(format!("{:?} is not a .json file", path))),
        }
    }
}
