//! Report data structures

mod network;
mod report;

pub use network::{InterfaceMap, InterfaceStatus, LinkState, LOOPBACK};
pub use report::{
    DiskUsage, FilesystemFacts, LoadAverage, MemoryFacts, ReleaseFacts, SystemFacts, SystemReport,
};
