//! Image release descriptor probe

use crate::data::ReleaseFacts;
use crate::utils::file::read_file;

/// Fixed path baked into board images at build time. Absent on ordinary
/// hosts, which renders as a normal unavailable probe.
pub const RELEASE_FILE: &str = "/etc/board-release";

pub fn release_facts() -> ReleaseFacts {
    ReleaseFacts {
        lines: read_file(RELEASE_FILE)
            .map(|content| parse_release(&content))
            .into(),
    }
}

pub fn parse_release(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_non_empty_lines_trimmed() {
        let content = "BOARD_NAME=carrier-v2\n\n  BUILD_ID=20260414  \nCHANNEL=stable\n";
        assert_eq!(
            parse_release(content),
            vec!["BOARD_NAME=carrier-v2", "BUILD_ID=20260414", "CHANNEL=stable"]
        );
    }

    #[test]
    fn blank_descriptor_parses_to_no_lines() {
        assert!(parse_release("\n  \n").is_empty());
    }
}
