//! Command execution utilities

use crate::error::{BoardcheckError, Result};
use std::process::Command;

/// Execute a command and return stdout as String
pub fn run_command(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program).args(args).output()?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        Err(BoardcheckError::Detection(format!(
            "command '{}' exited with code {:?}",
            program,
            output.status.code()
        )))
    }
}

/// Run a shell command line and report whether it exited zero.
///
/// Output is captured rather than inherited so probe commands never write
/// into the middle of the report. An `Err` here means the shell itself
/// could not be spawned, not that the command failed.
pub fn shell_status(command_line: &str) -> Result<bool> {
    shell_status_with("sh", command_line)
}

pub fn shell_status_with(shell: &str, command_line: &str) -> Result<bool> {
    let output = Command::new(shell).arg("-c").arg(command_line).output()?;
    Ok(output.status.success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_command_captures_stdout() {
        let out = run_command("echo", &["eth0"]).unwrap();
        assert_eq!(out, "eth0");
    }

    #[test]
    fn run_command_rejects_nonzero_exit() {
        assert!(run_command("false", &[]).is_err());
    }

    #[test]
    fn shell_status_reports_exit_code() {
        assert!(shell_status("exit 0").unwrap());
        assert!(!shell_status("exit 3").unwrap());
    }

    #[test]
    fn missing_shell_is_a_spawn_error() {
        assert!(shell_status_with("/no/such/shell", "true").is_err());
    }
}
