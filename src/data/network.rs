//! Network interface structures

use std::collections::BTreeMap;
use std::fmt;

/// Interface name of the loopback device. Kept in the parsed map, filtered
/// only at render time.
pub const LOOPBACK: &str = "lo";

/// Interface name to status, in name order
pub type InterfaceMap = BTreeMap<String, InterfaceStatus>;

/// Link state as reported by the interface listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Up,
    Down,
}

impl fmt::Display for LinkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkState::Up => write!(f, "up"),
            LinkState::Down => write!(f, "down"),
        }
    }
}

/// Address and state of a single interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceStatus {
    pub address: Option<String>,
    pub state: LinkState,
}

impl InterfaceStatus {
    pub fn address_or_default(&self) -> &str {
        self.address.as_deref().unwrap_or("No IP")
    }
}
