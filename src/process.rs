//! Synchronous execution of external commands.
//!
//! Every call blocks until the child exits. Failures are never raised to the
//! caller: they are folded into the returned [`CommandOutcome`].

use std::fmt;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Status reported when the command could not be spawned at all.
pub const SPAWN_FAILED_EXIT_CODE: i32 = 127;

/// A single external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            current_dir: None,
        }
    }

    /// Run the command from `dir` instead of the process working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit status and captured stdout of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub exit_code: i32,
    /// Captured stdout; `None` when the command printed nothing.
    pub output: Option<String>,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Execute `spec` and capture its stdout.
///
/// Stderr is passed through to the terminal so the tool's own diagnostics
/// reach the operator. Termination by signal is reported as status 1.
pub fn run(spec: &CommandSpec) -> CommandOutcome {
    log::debug!("running `{}`", spec);

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit());
    if let Some(dir) = &spec.current_dir {
        cmd.current_dir(dir);
    }

    let output = match cmd.output() {
        Ok(output) => output,
        Err(e) => {
            log::error!("failed to execute `{}`: {}", spec, e);
            return CommandOutcome {
                exit_code: SPAWN_FAILED_EXIT_CODE,
                output: None,
            };
        }
    };

    let exit_code = output.status.code().unwrap_or(1);
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    log::debug!("`{}` exited with code {}", spec, exit_code);

    CommandOutcome {
        exit_code,
        output: if stdout.is_empty() { None } else { Some(stdout) },
    }
}

/// Like [`run`], but a successful command that printed nothing counts as a
/// failure with status 1.
pub fn run_requiring_output(spec: &CommandSpec) -> CommandOutcome {
    let outcome = run(spec);
    if outcome.success() && outcome.output.is_none() {
        println!("There is no output for command {}", spec);
        return CommandOutcome {
            exit_code: 1,
            output: None,
        };
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandSpec {
        CommandSpec::new("sh", ["-c", script])
    }

    #[test]
    fn test_display_joins_program_and_args() {
        let spec = CommandSpec::new("git", ["fetch", "--all", "--prune"]);
        assert_eq!(spec.to_string(), "git fetch --all --prune");
    }

    #[test]
    fn test_run_captures_stdout() {
        let outcome = run(&sh("printf 'hello'"));
        assert!(outcome.success());
        assert_eq!(outcome.output.as_deref(), Some("hello"));
    }

    #[test]
    fn test_run_reports_exit_code() {
        let outcome = run(&sh("exit 3"));
        assert_eq!(outcome.exit_code, 3);
        assert_eq!(outcome.output, None);
    }

    #[test]
    fn test_run_missing_program() {
        let outcome = run(&CommandSpec::new(
            "definitely-not-a-real-program-xyz",
            Vec::<String>::new(),
        ));
        assert_eq!(outcome.exit_code, SPAWN_FAILED_EXIT_CODE);
    }

    #[test]
    fn test_empty_output_is_fine_by_default() {
        let outcome = run(&sh("true"));
        assert!(outcome.success());
        assert_eq!(outcome.output, None);
    }

    #[test]
    fn test_requiring_output_fails_on_empty() {
        let outcome = run_requiring_output(&sh("true"));
        assert_eq!(outcome.exit_code, 1);
        assert_eq!(outcome.output, None);
    }

    #[test]
    fn test_requiring_output_keeps_underlying_failure() {
        let outcome = run_requiring_output(&sh("exit 128"));
        assert_eq!(outcome.exit_code, 128);
    }

    #[test]
    fn test_run_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = run(&sh("pwd").in_dir(dir.path()));
        let printed = outcome.output.unwrap();
        let expected = dir.path().canonicalize().unwrap();
        assert_eq!(
            std::path::Path::new(printed.trim()).canonicalize().unwrap(),
            expected
        );
    }
}
