use std::fs::{self, OpenOptions, Permissions};
use std::io::{self, Write};
use std::os::unix::fs::PermissionsExt;

use super::{required_arg, required_pair, Command, CommandError, CommandResult, Flow};
use crate::core::state::ShellState;

#[derive(Clone)]
pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn usage(&self) -> &'static str {
        "cat [file]"
    }

    fn description(&self) -> &'static str {
        "Prints the content of the file"
    }

    fn execute(&self, args: &[String], state: &mut ShellState, out: &mut dyn Write) -> CommandResult {
        let file = required_arg(args)?;
        let contents = fs::read(state.resolve(file))?;

        out.write_all(&contents)?;
        if !contents.is_empty() && !contents.ends_with(b"\n") {
            writeln!(out)?;
        }
        Ok(Flow::Continue)
    }
}

/// Creates the file if needed. Existing contents are never touched.
#[derive(Clone)]
pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn usage(&self) -> &'static str {
        "touch [file]"
    }

    fn description(&self) -> &'static str {
        "Creates an empty file"
    }

    fn execute(&self, args: &[String], state: &mut ShellState, _out: &mut dyn Write) -> CommandResult {
        let file = required_arg(args)?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(state.resolve(file))?;
        Ok(Flow::Continue)
    }
}

/// Recursive and forceful: a missing target is not an error.
#[derive(Clone)]
pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn usage(&self) -> &'static str {
        "rm [target]"
    }

    fn description(&self) -> &'static str {
        "Removes a file or directory"
    }

    fn execute(&self, args: &[String], state: &mut ShellState, _out: &mut dyn Write) -> CommandResult {
        let target = state.resolve(required_arg(args)?);

        let metadata = match fs::symlink_metadata(&target) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Flow::Continue),
            Err(e) => return Err(e.into()),
        };

        if metadata.is_dir() {
            fs::remove_dir_all(&target)?;
        } else {
            fs::remove_file(&target)?;
        }
        Ok(Flow::Continue)
    }
}

#[derive(Clone)]
pub struct CpCommand;

impl Command for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn usage(&self) -> &'static str {
        "cp [src] [dest]"
    }

    fn description(&self) -> &'static str {
        "Copies a file"
    }

    fn execute(&self, args: &[String], state: &mut ShellState, _out: &mut dyn Write) -> CommandResult {
        let (src, dest) = required_pair(args)?;
        fs::copy(state.resolve(src), state.resolve(dest))?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone)]
pub struct MvCommand;

impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    fn usage(&self) -> &'static str {
        "mv [src] [dest]"
    }

    fn description(&self) -> &'static str {
        "Moves or renames a file"
    }

    fn execute(&self, args: &[String], state: &mut ShellState, _out: &mut dyn Write) -> CommandResult {
        let (src, dest) = required_pair(args)?;
        fs::rename(state.resolve(src), state.resolve(dest))?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone)]
pub struct ChmodCommand;

impl ChmodCommand {
    /// Octal, as in `644` or `0755`.
    fn parse_mode(mode: &str) -> Result<u32, CommandError> {
        u32::from_str_radix(mode, 8)
            .ok()
            .filter(|bits| *bits <= 0o7777)
            .ok_or_else(|| CommandError::InvalidArgument(format!("invalid mode: '{}'", mode)))
    }
}

impl Command for ChmodCommand {
    fn name(&self) -> &'static str {
        "chmod"
    }

    fn usage(&self) -> &'static str {
        "chmod [mode] [file]"
    }

    fn description(&self) -> &'static str {
        "Changes file permissions"
    }

    fn execute(&self, args: &[String], state: &mut ShellState, _out: &mut dyn Write) -> CommandResult {
        let (mode, file) = required_pair(args)?;
        let bits = Self::parse_mode(mode)?;
        fs::set_permissions(state.resolve(file), Permissions::from_mode(bits))?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone)]
pub struct ChownCommand;

impl ChownCommand {
    /// Numeric `uid:gid`.
    fn parse_owner(owner: &str) -> Result<(u32, u32), CommandError> {
        owner
            .split_once(':')
            .and_then(|(uid, gid)| Some((uid.parse().ok()?, gid.parse().ok()?)))
            .ok_or_else(|| CommandError::InvalidArgument(format!("invalid owner: '{}'", owner)))
    }
}

impl Command for ChownCommand {
    fn name(&self) -> &'static str {
        "chown"
    }

    fn usage(&self) -> &'static str {
        "chown [owner:group] [file]"
    }

    fn description(&self) -> &'static str {
        "Changes file owner and group"
    }

    fn execute(&self, args: &[String], state: &mut ShellState, _out: &mut dyn Write) -> CommandResult {
        let (owner, file) = required_pair(args)?;
        let (uid, gid) = Self::parse_owner(owner)?;
        std::os::unix::fs::chown(state.resolve(file), Some(uid), Some(gid))?;
        Ok(Flow::Continue)
    }
}
