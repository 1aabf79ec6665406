use std::process::Output;

use crate::config::global_config;

/// A wrapper around [`xshell::Cmd`] that runs attached to the terminal in
/// verbose mode and captures output otherwise, so failures can surface the
/// child's stderr.
pub struct Cmd<'a> {
    inner: xshell::Cmd<'a>,
    force_run: bool,
}

#[derive(thiserror::Error, Debug)]
#[error("{message}")]
pub struct CmdError {
    pub stderr: Option<String>,
    message: String,
}

impl From<xshell::Error> for CmdError {
    fn from(value: xshell::Error) -> Self {
        Self {
            stderr: None,
            message: value.to_string(),
        }
    }
}

pub type CmdResult<T> = Result<T, CmdError>;

impl<'a> Cmd<'a> {
    pub fn new(cmd: xshell::Cmd<'a>) -> Self {
        Self {
            inner: cmd,
            force_run: false,
        }
    }

    /// Run attached to the terminal even when not in verbose mode.
    pub fn with_force_run(mut self) -> Self {
        self.force_run = true;
        self
    }

    pub fn run(self) -> CmdResult<()> {
        let command_text = self.inner.to_string();
        if global_config().verbose || self.force_run {
            self.inner.run()?;
            return Ok(());
        }

        let output = self.inner.ignore_status().output()?;
        check_output_status(&command_text, &output)
    }
}

fn check_output_status(command_text: &str, output: &Output) -> CmdResult<()> {
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    Err(CmdError {
        message: format!(
            "Command {command_text} failed with exit status {}\n{}",
            output.status,
            stderr.trim()
        ),
        stderr: Some(stderr),
    })
}
