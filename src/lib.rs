//! boardcheck library
//!
//! A status reporter and smoke tester for embedded Linux board bring-up.
//! Collects host facts through independent best-effort probes and runs a
//! fixed list of capability checks.

pub mod checks;
pub mod collectors;
pub mod config;
pub mod data;
pub mod delay;
pub mod display;
pub mod error;
pub mod probe;
pub mod utils;

pub use data::{SystemFacts, SystemReport};
pub use error::{BoardcheckError, Result};
pub use probe::{Probe, PLACEHOLDER};

use collectors::{hardware, network, release, system};
use data::FilesystemFacts;

/// Collect the full status report.
///
/// Individual probe failures surface as [`Probe::Unavailable`] fields; the
/// collection itself cannot fail.
pub fn collect_report() -> SystemReport {
    SystemReport {
        system: SystemFacts {
            hostname: system::hostname(),
            os_name: system::os_name(),
            uptime: system::uptime(),
            kernel_version: system::kernel_version(),
            architecture: system::architecture(),
            cpu_model: hardware::cpu_model(),
            cpu_count: hardware::cpu_count(),
            temperature: hardware::temperature(),
            load_average: hardware::load_average(),
        },
        memory: hardware::memory_facts(),
        interfaces: network::interfaces(),
        filesystem: FilesystemFacts {
            root: hardware::root_disk_usage(),
        },
        release: release::release_facts(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_collection_never_panics() {
        // Every field is an independent probe; whatever the host looks
        // like, collection completes.
        let report = collect_report();
        let _ = report.system.hostname.render();
        let _ = report.memory.total.render();
        let _ = report.filesystem.root.render();
    }
}
