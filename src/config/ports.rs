use crate::{
    error::{Error, Result},
    utils::user_io::{read_and_parse_user_entry, ReadAndParseUserEntryRes},
};
use serialport::SerialPortType;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortInfo {
    pub port_name: String,
    pub product: Option<String>,
    pub usb: bool,
}

impl fmt::Display for PortInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.product {
            Some(product) => write!(f, "{} ({})", self.port_name, product),
            None if self.usb => write!(f, "{} (usb)", self.port_name),
            None => write!(f, "{}", self.port_name),
        }
    }
}

pub fn available_ports() -> Result<Vec<PortInfo>> {
    let ports = serialport::available_ports().map_err(Error::Enumerate)?;

    let mut infos = vec![];
    for serial_port_info in ports {
        let info = match serial_port_info.port_type {
            SerialPortType::UsbPort(usb_port_info) => PortInfo {
                port_name: serial_port_info.port_name,
                product: usb_port_info.product,
                usb: true,
            },
            _ => PortInfo {
                port_name: serial_port_info.port_name,
                product: None,
                usb: false,
            },
        };
        infos.push(info);
    }
    // usb adapters first, they are almost always the one wanted
    infos.sort_by_key(|p| !p.usb);
    Ok(infos)
}

pub fn print_ports(ports: &[PortInfo]) {
    if ports.is_empty() {
        println!("> No serial ports found");
        return;
    }
    println!("Serial Ports:");
    for (idx, p) in ports.iter().enumerate() {
        println!("{}) {}", idx + 1, p);
    }
}

pub enum UserSelectPortRes {
    Port(String),
    EntryOutOfRange,
    InvalidEntry,
    EmptyEntry,
}

/// Map a 1-based menu index onto the port list.
pub fn select_by_index(ports: &[PortInfo], entered_idx: usize) -> UserSelectPortRes {
    if 1 > entered_idx || entered_idx > ports.len() {
        UserSelectPortRes::EntryOutOfRange
    } else {
        UserSelectPortRes::Port(ports[entered_idx - 1].port_name.clone())
    }
}

/// Prompt until the user picks a port. An empty entry cancels.
pub fn user_select_port(ports: &[PortInfo]) -> Result<Option<String>> {
    if ports.is_empty() {
        return Err(Error::config("no serial ports found"));
    }
    loop {
        print_ports(ports);
        let msg = "Enter index of port to use (or enter to quit)";
        let res = match read_and_parse_user_entry::<usize>(msg) {
            ReadAndParseUserEntryRes::Ok(entered_idx) => select_by_index(ports, entered_idx),
            ReadAndParseUserEntryRes::ParseErr { e, user_entry } => {
                println!("> Invalid Entry {:?} {:?}\n", user_entry, e);
                UserSelectPortRes::InvalidEntry
            }
            ReadAndParseUserEntryRes::EmptyEntry => UserSelectPortRes::EmptyEntry,
            ReadAndParseUserEntryRes::ReadErr(e) => return Err(e.into()),
        };
        match res {
            UserSelectPortRes::Port(port_name) => {
                println!("> Selected {}\n", port_name);
                return Ok(Some(port_name));
            }
            UserSelectPortRes::EntryOutOfRange => println!("> Entry Out of Range\n"),
            UserSelectPortRes::InvalidEntry => {}
            UserSelectPortRes::EmptyEntry => return Ok(None),
        }
    }
}
