use std::io::Write;

use super::{Command, CommandResult, Flow};
use crate::core::state::ShellState;

#[derive(Clone)]
pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn usage(&self) -> &'static str {
        "echo [text]"
    }

    fn description(&self) -> &'static str {
        "Prints text to the console"
    }

    fn execute(&self, args: &[String], _state: &mut ShellState, out: &mut dyn Write) -> CommandResult {
        writeln!(out, "{}", args.join(" "))?;
        Ok(Flow::Continue)
    }
}

#[derive(Clone)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn usage(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Exits the shell"
    }

    fn execute(&self, _args: &[String], _state: &mut ShellState, _out: &mut dyn Write) -> CommandResult {
        Ok(Flow::Exit)
    }
}

/// Prints the usage and description of every registered builtin.
#[derive(Clone)]
pub struct HelpCommand {
    entries: Vec<(&'static str, &'static str)>,
}

impl HelpCommand {
    const USAGE: &'static str = "help";
    const DESCRIPTION: &'static str = "Shows this list of commands";

    pub fn new(mut entries: Vec<(&'static str, &'static str)>) -> Self {
        entries.push((Self::USAGE, Self::DESCRIPTION));
        entries.sort_unstable();
        Self { entries }
    }
}

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn usage(&self) -> &'static str {
        Self::USAGE
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn execute(&self, _args: &[String], _state: &mut ShellState, out: &mut dyn Write) -> CommandResult {
        writeln!(out, "Available commands:")?;
        for (usage, description) in &self.entries {
            writeln!(out, "    {} - {}", usage, description)?;
        }
        Ok(Flow::Continue)
    }
}
