//! Report-wide information structures

use super::network::InterfaceMap;
use crate::probe::Probe;
use std::fmt;

/// Complete status report gathered by one run
#[derive(Debug, Clone)]
pub struct SystemReport {
    pub system: SystemFacts,
    pub memory: MemoryFacts,
    pub interfaces: Probe<InterfaceMap>,
    pub filesystem: FilesystemFacts,
    pub release: ReleaseFacts,
}

/// Host identity and runtime facts
#[derive(Debug, Clone)]
pub struct SystemFacts {
    pub hostname: Probe<String>,
    pub os_name: Probe<String>,
    pub uptime: Probe<String>,
    pub kernel_version: Probe<String>,
    pub architecture: Probe<String>,
    pub cpu_model: Probe<String>,
    pub cpu_count: Probe<usize>,
    pub temperature: Probe<String>,
    pub load_average: Probe<LoadAverage>,
}

/// The first three fields of /proc/loadavg, kept verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadAverage {
    pub one: String,
    pub five: String,
    pub fifteen: String,
}

impl fmt::Display for LoadAverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.one, self.five, self.fifteen)
    }
}

/// Raw kB figures from /proc/meminfo, printed unscaled
#[derive(Debug, Clone)]
pub struct MemoryFacts {
    pub total: Probe<String>,
    pub free: Probe<String>,
    pub available: Probe<String>,
}

impl MemoryFacts {
    pub fn unavailable() -> Self {
        MemoryFacts {
            total: Probe::Unavailable,
            free: Probe::Unavailable,
            available: Probe::Unavailable,
        }
    }
}

/// Filesystem usage facts
#[derive(Debug, Clone)]
pub struct FilesystemFacts {
    pub root: Probe<DiskUsage>,
}

/// Root filesystem usage figures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskUsage {
    pub total: String,
    pub used: String,
    pub available: String,
}

impl fmt::Display for DiskUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} total, {} used, {} available",
            self.total, self.used, self.available
        )
    }
}

/// Non-empty lines of the image release descriptor
#[derive(Debug, Clone)]
pub struct ReleaseFacts {
    pub lines: Probe<Vec<String>>,
}
