//! Smoke checks run after the status report
//!
//! A fixed, ordered list of coarse capability checks. Each one shells out,
//! and the exit status alone decides the verdict; these are informational,
//! not a correctness suite.

use crate::error::Result;
use crate::utils::command::shell_status;
use std::fmt;

/// Outcome of one smoke check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Pass,
    Fail,
    Error,
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Pass => write!(f, "PASS"),
            CheckOutcome::Fail => write!(f, "FAIL"),
            CheckOutcome::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: &'static str,
    pub outcome: CheckOutcome,
}

/// The check list, in display order. The order never varies between runs.
pub const SMOKE_CHECKS: [(&str, &str); 4] = [
    ("Python Runtime", "python3 --version"),
    ("Basic Math", "python3 -c 'print(2+2)'"),
    ("File System", "ls /tmp > /dev/null"),
    ("Network Stack", "ping -c 1 127.0.0.1 > /dev/null"),
];

pub fn run_smoke_checks() -> Vec<CheckResult> {
    SMOKE_CHECKS
        .iter()
        .map(|&(name, command)| CheckResult {
            name,
            outcome: classify(shell_status(command)),
        })
        .collect()
}

/// Exit 0 passes, non-zero fails, and a spawn failure is an error.
fn classify(verdict: Result<bool>) -> CheckOutcome {
    match verdict {
        Ok(true) => CheckOutcome::Pass,
        Ok(false) => CheckOutcome::Fail,
        Err(_) => CheckOutcome::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardcheckError;
    use crate::utils::command::shell_status_with;

    #[test]
    fn check_list_is_fixed_and_ordered() {
        let names: Vec<&str> = SMOKE_CHECKS.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["Python Runtime", "Basic Math", "File System", "Network Stack"]
        );
    }

    #[test]
    fn results_preserve_check_order() {
        let results = run_smoke_checks();
        assert_eq!(results.len(), SMOKE_CHECKS.len());
        for (result, (name, _)) in results.iter().zip(SMOKE_CHECKS.iter()) {
            assert_eq!(result.name, *name);
        }
    }

    #[test]
    fn classifies_all_three_outcomes() {
        assert_eq!(classify(shell_status("exit 0")), CheckOutcome::Pass);
        assert_eq!(classify(shell_status("exit 1")), CheckOutcome::Fail);
        assert_eq!(
            classify(shell_status_with("/no/such/shell", "true")),
            CheckOutcome::Error
        );
    }

    #[test]
    fn spawn_errors_classify_as_error() {
        let verdict = Err(BoardcheckError::Detection("spawn failed".to_string()));
        assert_eq!(classify(verdict), CheckOutcome::Error);
    }

    #[test]
    fn outcome_labels_render() {
        assert_eq!(CheckOutcome::Pass.to_string(), "PASS");
        assert_eq!(CheckOutcome::Fail.to_string(), "FAIL");
        assert_eq!(CheckOutcome::Error.to_string(), "ERROR");
    }
}
