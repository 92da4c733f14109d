//! Per-probe result type
//!
//! Every fact in the report is gathered by an independent best-effort probe.
//! A probe that cannot complete collapses to [`Probe::Unavailable`] and is
//! rendered as the fixed placeholder; no failure detail crosses the probe
//! boundary.

use std::fmt;

/// Literal substitute printed when a probe cannot complete.
pub const PLACEHOLDER: &str = "Unknown";

/// Outcome of a single fact-gathering probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe<T> {
    Known(T),
    Unavailable,
}

impl<T> Probe<T> {
    /// The probed value, if the probe completed.
    pub fn known(&self) -> Option<&T> {
        match self {
            Probe::Known(value) => Some(value),
            Probe::Unavailable => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Probe<U> {
        match self {
            Probe::Known(value) => Probe::Known(f(value)),
            Probe::Unavailable => Probe::Unavailable,
        }
    }
}

impl<T: fmt::Display> Probe<T> {
    /// Rendered value, or the placeholder when the probe failed.
    pub fn render(&self) -> String {
        match self {
            Probe::Known(value) => value.to_string(),
            Probe::Unavailable => PLACEHOLDER.to_string(),
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Probe<T> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Probe::Known(value),
            Err(_) => Probe::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_value_renders_as_itself() {
        let probe = Probe::Known("4.19.97-v7l+");
        assert_eq!(probe.render(), "4.19.97-v7l+");
    }

    #[test]
    fn unavailable_renders_placeholder() {
        let probe: Probe<String> = Probe::Unavailable;
        assert_eq!(probe.render(), PLACEHOLDER);
    }

    #[test]
    fn result_converts_to_probe() {
        let ok: Result<u64, String> = Ok(4);
        let err: Result<u64, String> = Err("no such file".to_string());
        assert_eq!(Probe::from(ok), Probe::Known(4));
        assert_eq!(Probe::from(err), Probe::Unavailable);
    }

    #[test]
    fn map_preserves_unavailable() {
        let probe: Probe<u64> = Probe::Unavailable;
        assert_eq!(probe.map(|n| n * 2), Probe::Unavailable);
    }
}
