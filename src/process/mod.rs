use std::fmt;
use std::process::ExitStatus;

pub mod executor;
pub mod signal;

pub use executor::{Interpreter, ProcessExecutor};

#[derive(Debug)]
pub enum ProcessError {
    /// The child could not be started.
    Spawn(std::io::Error),
    /// The child ran and exited unsuccessfully.
    Failed { status: ExitStatus, stderr: String },
    /// Delivering a signal failed.
    Signal(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn(e) => write!(f, "{}", e),
            ProcessError::Failed { status, stderr } if stderr.is_empty() => {
                write!(f, "process exited with {}", status)
            }
            ProcessError::Failed { stderr, .. } => write!(f, "{}", stderr),
            ProcessError::Signal(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
