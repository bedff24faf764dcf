use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::path::PathExpander;

/// The shell's working directory.
///
/// Builtins resolve their path arguments here and subprocesses start here.
/// The read loop mirrors changes into the real process directory.
#[derive(Debug, Clone)]
pub struct ShellState {
    current_dir: PathBuf,
    dir_changed: bool,
    path_expander: PathExpander,
}

impl ShellState {
    pub fn new() -> io::Result<Self> {
        Ok(Self::with_dir(env::current_dir()?))
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: dir.into(),
            dir_changed: false,
            path_expander: PathExpander::new(),
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Tilde expansion only; relative paths stay relative.
    pub fn expand(&self, arg: &str) -> PathBuf {
        self.path_expander.expand(arg)
    }

    /// Tilde expansion, then relative paths are joined onto the current directory.
    pub fn resolve(&self, arg: &str) -> PathBuf {
        let path = self.expand(arg);
        if path.is_absolute() {
            path
        } else {
            self.current_dir.join(path)
        }
    }

    /// Leaves the directory unchanged on error.
    pub fn change_dir(&mut self, arg: &str) -> io::Result<()> {
        let target = fs::canonicalize(self.resolve(arg))?;
        if !target.is_dir() {
            return Err(io::Error::from_raw_os_error(libc::ENOTDIR));
        }

        self.current_dir = target;
        self.dir_changed = true;
        Ok(())
    }

    /// Reports whether `change_dir` succeeded since the last call.
    pub fn take_dir_change(&mut self) -> bool {
        std::mem::take(&mut self.dir_changed)
    }
}
