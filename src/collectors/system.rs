//! Host identity probes (hostname, OS name, kernel, uptime, architecture)

use crate::error::{BoardcheckError, Result};
use crate::probe::Probe;
use crate::utils::command::run_command;
use crate::utils::file::read_first_line;
use crate::utils::parsing::format_uptime;

pub fn hostname() -> Probe<String> {
    read_first_line("/proc/sys/kernel/hostname").into()
}

pub fn os_name() -> Probe<String> {
    read_os_name().into()
}

pub fn kernel_version() -> Probe<String> {
    read_kernel_version().into()
}

pub fn architecture() -> Probe<String> {
    run_command("uname", &["-m"]).into()
}

pub fn uptime() -> Probe<String> {
    read_uptime_seconds().map(format_uptime).into()
}

fn read_os_name() -> Result<String> {
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    // Read line by line so we stop at PRETTY_NAME without slurping the file
    let file = File::open("/etc/os-release")?;
    let mut reader = BufReader::new(file);
    let mut line = String::with_capacity(128);

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line)?;
        if bytes_read == 0 {
            break;
        }
        if line.starts_with("PRETTY_NAME") {
            if let Some(start) = line.find('=') {
                let value = &line[start + 1..];
                return Ok(value.trim().trim_matches('"').to_string());
            }
        }
    }
    Err(BoardcheckError::Detection("OS name not found".to_string()))
}

fn read_kernel_version() -> Result<String> {
    // /proc/version is a single line; the release string is the third field
    let version_info = read_first_line("/proc/version")?;
    version_info
        .split_whitespace()
        .nth(2)
        .map(|v| v.to_string())
        .ok_or_else(|| BoardcheckError::Detection("kernel version not found".to_string()))
}

fn read_uptime_seconds() -> Result<u64> {
    let uptime_line = read_first_line("/proc/uptime")?;
    let secs: f64 = uptime_line
        .split_whitespace()
        .next()
        .unwrap_or("0")
        .parse()
        .map_err(|_| BoardcheckError::Parse(format!("bad uptime line: {}", uptime_line)))?;
    Ok(secs as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_probe_is_best_effort() {
        // On any Linux host this resolves; the point is it never panics
        let _ = hostname();
    }

    #[test]
    fn uptime_formats_from_proc() {
        match uptime() {
            Probe::Known(formatted) => assert!(formatted.ends_with('m')),
            Probe::Unavailable => {}
        }
    }
}
