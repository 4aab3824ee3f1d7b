use crate::output_utils;
use std::process::ExitCode;

/// What a subcommand hands back to `main`: text for stdout or stderr plus
/// the process exit code.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// A failure that lists each of `errors` (with its context chain) below a
    /// one-line summary.
    pub fn errors(summary: std::fmt::Arguments<'_>, errors: &[anyhow::Error]) -> Self {
        Self::stderr(format_args!(
            "{} {summary}\n{}",
            output_utils::RED_X,
            errors.iter()
                .map(|e| format!("  * {e:#}"))
                .collect::<Vec<_>>()
                .join("\n"),
        ))
    }

    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// Writes the captured output to the process' stdout/stderr.
    pub fn emit(self) -> ExitCode {
        if let Some(stdout) = self.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = self.stderr {
            eprintln!("{stderr}");
        }
        self.exit_code
    }
}
