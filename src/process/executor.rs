use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

use super::ProcessError;

/// The OS command interpreter used for lines the shell does not know.
/// It is always run as `<program> -c <line>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    program: String,
}

impl Interpreter {
    pub fn system() -> Self {
        Self::new("sh")
    }

    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::system()
    }
}

/// Runs child processes to completion with stdout and stderr captured.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    interpreter: Interpreter,
}

impl ProcessExecutor {
    pub fn new(interpreter: Interpreter) -> Self {
        ProcessExecutor { interpreter }
    }

    /// Hands a whole command line to the interpreter unchanged.
    pub fn run_line(&self, line: &str, cwd: &Path) -> Result<Vec<u8>, ProcessError> {
        let args = [OsStr::new("-c"), OsStr::new(line)];
        self.capture(&self.interpreter.program, &args, cwd)
    }

    /// Runs `program` with a discrete argument vector; no shell is involved.
    ///
    /// Returns stdout on a zero exit status. The child's stdin is closed so
    /// it cannot consume the shell's own input.
    pub fn capture<S: AsRef<OsStr>>(
        &self,
        program: &str,
        args: &[S],
        cwd: &Path,
    ) -> Result<Vec<u8>, ProcessError> {
        log::debug!("spawning {} in {}", program, cwd.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(ProcessError::Spawn)?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            log::debug!("{} exited with {}", program, output.status);
            Err(ProcessError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            })
        }
    }
}
