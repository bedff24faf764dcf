use std::io::Write;

use super::{required_arg, Command, CommandResult, Flow};
use crate::core::state::ShellState;

#[derive(Clone)]
pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn usage(&self) -> &'static str {
        "cd [dir]"
    }

    fn description(&self) -> &'static str {
        "Changes the current directory"
    }

    fn execute(&self, args: &[String], state: &mut ShellState, _out: &mut dyn Write) -> CommandResult {
        let dir = required_arg(args)?;
        state.change_dir(dir)?;
        log::debug!("working directory is now {}", state.current_dir().display());
        Ok(Flow::Continue)
    }
}

#[derive(Clone)]
pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn usage(&self) -> &'static str {
        "pwd"
    }

    fn description(&self) -> &'static str {
        "Prints the current working directory"
    }

    fn execute(&self, _args: &[String], state: &mut ShellState, out: &mut dyn Write) -> CommandResult {
        writeln!(out, "{}", state.current_dir().display())?;
        Ok(Flow::Continue)
    }
}
