use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::Path;

use super::{required_arg, Command, CommandResult, Flow};
use crate::core::state::ShellState;
use crate::process::ProcessExecutor;

#[derive(Clone)]
pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn usage(&self) -> &'static str {
        "ls [dir]"
    }

    fn description(&self) -> &'static str {
        "Lists files in the directory"
    }

    fn execute(&self, args: &[String], state: &mut ShellState, out: &mut dyn Write) -> CommandResult {
        let dir = match args.first() {
            Some(dir) => state.resolve(dir),
            None => state.current_dir().to_path_buf(),
        };

        let mut names = fs::read_dir(dir)?
            .map(|entry| entry.map(|entry| entry.file_name()))
            .collect::<Result<Vec<_>, _>>()?;
        names.sort();

        for name in names {
            writeln!(out, "{}", name.to_string_lossy())?;
        }
        Ok(Flow::Continue)
    }
}

#[derive(Clone)]
pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn usage(&self) -> &'static str {
        "mkdir [dir]"
    }

    fn description(&self) -> &'static str {
        "Creates a new directory"
    }

    fn execute(&self, args: &[String], state: &mut ShellState, _out: &mut dyn Write) -> CommandResult {
        let dir = required_arg(args)?;
        fs::create_dir(state.resolve(dir))?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone)]
pub struct RmdirCommand;

impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn usage(&self) -> &'static str {
        "rmdir [dir]"
    }

    fn description(&self) -> &'static str {
        "Removes an empty directory"
    }

    fn execute(&self, args: &[String], state: &mut ShellState, _out: &mut dyn Write) -> CommandResult {
        let dir = required_arg(args)?;
        fs::remove_dir(state.resolve(dir))?;
        Ok(Flow::Continue)
    }
}

/// Runs the host `find`. An empty pattern lists everything under `dir`.
/// A `dir` starting with `-` is passed as `./<dir>` so `find` never reads it
/// as an expression.
#[derive(Clone)]
pub struct FindCommand {
    process_executor: ProcessExecutor,
}

impl FindCommand {
    pub fn new(process_executor: ProcessExecutor) -> Self {
        Self { process_executor }
    }
}

impl Command for FindCommand {
    fn name(&self) -> &'static str {
        "find"
    }

    fn usage(&self) -> &'static str {
        "find [dir] [pattern]"
    }

    fn description(&self) -> &'static str {
        "Finds files by name"
    }

    fn execute(&self, args: &[String], state: &mut ShellState, out: &mut dyn Write) -> CommandResult {
        let dir = args.first().map(String::as_str).unwrap_or(".");
        let pattern = args.get(1).map(String::as_str).unwrap_or("");

        let root = if dir.starts_with('-') {
            Path::new(".").join(dir)
        } else {
            state.expand(dir)
        };

        let mut find_args: Vec<OsString> = vec![root.into_os_string()];
        if !pattern.is_empty() {
            find_args.push("-name".into());
            find_args.push(pattern.into());
        }

        let stdout = self
            .process_executor
            .capture("find", &find_args, state.current_dir())?;
        out.write_all(&stdout)?;
        Ok(Flow::Continue)
    }
}
