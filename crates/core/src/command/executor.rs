//! Synchronous process execution

use std::io;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

use super::ProcessCommand;

/// Exit code and separately captured output streams of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs external programs for the toolchain plugins.
///
/// `execute` blocks the calling thread until the child exits. It imposes no
/// timeout; that policy belongs to whoever hosts the runner.
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, command: &ProcessCommand) -> Result<ProcessOutput>;
}

impl<F> CommandExecutor for F
where
    F: Fn(&ProcessCommand) -> Result<ProcessOutput> + Send + Sync,
{
    fn execute(&self, command: &ProcessCommand) -> Result<ProcessOutput> {
        self(command)
    }
}

/// Executes commands as real child processes
///
/// A wait that the OS reports as interrupted becomes
/// [`Error::ProcessInterrupted`]. In practice std retries `EINTR` itself, so
/// this is rarely observed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    fn execute(&self, command: &ProcessCommand) -> Result<ProcessOutput> {
        tracing::debug!("Running: {}", command.to_shell_command());

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = command.working_dir() {
            cmd.current_dir(dir);
        }

        for (key, value) in &command.env {
            cmd.env(key, value);
        }

        let child = cmd.spawn().map_err(|source| Error::ProcessSpawnError {
            program: command.program.clone(),
            source,
        })?;

        // std already retries EINTR inside `wait_with_output`, so `Interrupted`
        // only surfaces on platforms that report it some other way
        let output = child.wait_with_output().map_err(|e| match e.kind() {
            io::ErrorKind::Interrupted => Error::ProcessInterrupted {
                program: command.program.clone(),
            },
            _ => Error::IoError(e),
        })?;

        tracing::debug!(
            "`{}` exited with {:?}",
            command.program,
            output.status.code()
        );

        Ok(ProcessOutput {
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
