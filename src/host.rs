use anyhow::{Context, Result};
use colored::*;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A shell command line the host runs on our behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellRequest {
    pub command_line: String,
    pub capture_stdout: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ShellOutput {
    pub stdout: Vec<u8>,
}

/// Capabilities the surrounding file manager or shell provides.
pub trait Host {
    /// Change the host's working directory.
    fn cd(&mut self, path: &Path) -> Result<()>;
    /// Show a message to the user; `bad` marks it as a warning.
    fn notify(&mut self, message: &str, bad: bool);
    /// Run a command line through the host's shell and wait for it.
    fn execute_command(&mut self, request: &ShellRequest) -> Result<ShellOutput>;
    /// Repaint the host UI after a full-screen child exits.
    fn redraw(&mut self);
}

/// Host for a plain terminal. A process cannot change its parent's
/// directory, so `cd` hands the target to the shell wrapper instead.
pub struct TerminalHost {
    shell: String,
    output_file: Option<PathBuf>,
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl TerminalHost {
    pub fn new(shell: String, output_file: Option<PathBuf>) -> Self {
        Self {
            shell,
            output_file,
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }

    #[cfg(test)]
    fn with_writers(output_file: Option<PathBuf>, stdout: Box<dyn Write>, stderr: Box<dyn Write>) -> Self {
        Self {
            shell: "sh".to_string(),
            output_file,
            stdout,
            stderr,
        }
    }
}

impl Host for TerminalHost {
    fn cd(&mut self, path: &Path) -> Result<()> {
        info!("Changing directory to {:?}", path);
        // Output for the shell wrapper to capture the path
        let bytes = path.as_os_str().as_encoded_bytes();
        if let Some(output_file) = &self.output_file {
            fs::write(output_file, bytes)
                .with_context(|| format!("Failed to write jump path to {:?}", output_file))?;
        } else {
            self.stdout
                .write_all(bytes)
                .and_then(|()| self.stdout.write_all(b"\n"))
                .context("Failed to print jump path")?;
        }
        Ok(())
    }

    fn notify(&mut self, message: &str, bad: bool) {
        if bad {
            writeln!(self.stderr, "{} {}", "⚠️".yellow(), message.yellow()).ok();
        } else {
            writeln!(self.stdout, "{}", message).ok();
        }
    }

    fn execute_command(&mut self, request: &ShellRequest) -> Result<ShellOutput> {
        // "cmd" or "cmd.exe" uses /C, others use -c
        let flag = if self.shell.contains("cmd") && !self.shell.contains("sh") {
            "/C"
        } else {
            "-c"
        };
        debug!("{} {} {}", self.shell, flag, request.command_line);

        let mut command = Command::new(&self.shell);
        command
            .arg(flag)
            .arg(&request.command_line)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        if request.capture_stdout {
            command.stdout(Stdio::piped());
            let output = command
                .output()
                .with_context(|| format!("Failed to spawn shell: {}", self.shell))?;
            debug!("Shell exited with {:?}", output.status.code());
            Ok(ShellOutput { stdout: output.stdout })
        } else {
            command.stdout(Stdio::inherit());
            let status = command
                .status()
                .with_context(|| format!("Failed to spawn shell: {}", self.shell))?;
            debug!("Shell exited with {:?}", status.code());
            Ok(ShellOutput::default())
        }
    }

    fn redraw(&mut self) {
        debug!("Nothing to redraw on a plain terminal");
    }
}
