//! External process execution
//!
//! Publishing shells out to `cnab-to-oci`. The [`CommandRunner`] trait is the
//! seam between the publisher and the operating system so the pipeline can
//! be driven by a recording fake in tests.

use std::ffi::OsString;
use std::fmt;
use std::process::Command;

use crate::error::{self, Result};

/// A program and its argument vector. Arguments are kept as OS strings so
/// paths reach the child process byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<OsString>,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Name of the subcommand, the first argument not starting with `-`
    /// and not consumed as a flag value
    #[cfg(test)]
    pub fn subcommand(&self) -> Option<&str> {
        let mut iter = self.args.iter().filter_map(|a| a.to_str());
        while let Some(arg) = iter.next() {
            if arg == "--log-level" {
                iter.next();
            } else if !arg.starts_with('-') {
                return Some(arg);
            }
        }
        None
    }

    /// Value following `flag`, if present
    #[cfg(test)]
    pub fn flag_value(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .and_then(|a| a.to_str())
    }

    #[cfg(test)]
    pub fn has_flag(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{arg}'")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Outcome of a process that was launched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code; `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Human readable status for messages
    pub fn status_label(&self) -> String {
        match self.code {
            Some(code) => format!("exit status {code}"),
            None => "termination by signal".to_string(),
        }
    }
}

/// Capability to run an external command to completion
pub trait CommandRunner {
    /// Run `command` and wait for it. Errors only when the process cannot be
    /// launched; a non-zero exit is reported through the outcome.
    fn run(&self, command: &ExternalCommand) -> Result<CommandOutcome>;
}

/// Runs commands as child processes of this one
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ExternalCommand) -> Result<CommandOutcome> {
        let output = Command::new(&command.program)
            .args(&command.args)
            .output()
            .map_err(|e| error::command::launch_failed(&command.program, &e))?;

        Ok(CommandOutcome {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
