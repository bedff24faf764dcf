use std::collections::BTreeMap;
use std::io::Write;

mod builtin;
mod cd;
mod directory;
mod file;
mod process;
mod text;

pub use builtin::{EchoCommand, ExitCommand, HelpCommand};
pub use cd::{CdCommand, PwdCommand};
pub use directory::{FindCommand, LsCommand, MkdirCommand, RmdirCommand};
pub use file::{CatCommand, ChmodCommand, ChownCommand, CpCommand, MvCommand, RmCommand, TouchCommand};
pub use process::{KillCommand, PsCommand};
pub use text::{GrepCommand, HeadCommand, TailCommand, WcCommand};

use crate::core::state::ShellState;
use crate::process::{ProcessError, ProcessExecutor};

#[derive(Debug)]
pub enum CommandError {
    /// A command needing one argument got none.
    MissingArgument,
    /// A command needing two arguments got fewer.
    MissingArguments,
    InvalidArgument(String),
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::MissingArgument => write!(f, "missing argument"),
            CommandError::MissingArguments => write!(f, "missing arguments"),
            CommandError::InvalidArgument(msg) => write!(f, "{}", msg),
            CommandError::IoError(err) => write!(f, "{}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// What the read loop does after a command returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub type CommandResult = Result<Flow, CommandError>;

/// A builtin. Output goes to `out`; errors are returned to the caller,
/// which reports them prefixed with [`Command::name`].
pub trait Command {
    fn name(&self) -> &'static str;

    /// Synopsis shown by `help`, e.g. `cp [src] [dest]`.
    fn usage(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn execute(&self, args: &[String], state: &mut ShellState, out: &mut dyn Write) -> CommandResult;
}

/// The builtin registry. Fixed after construction.
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, Box<dyn Command>>,
}

impl CommandExecutor {
    pub fn new(process_executor: ProcessExecutor) -> Self {
        let mut executor = Self {
            commands: BTreeMap::new(),
        };

        executor.register(EchoCommand);
        executor.register(PwdCommand);
        executor.register(LsCommand);
        executor.register(CdCommand);
        executor.register(CatCommand);
        executor.register(TouchCommand);
        executor.register(MkdirCommand);
        executor.register(RmdirCommand);
        executor.register(RmCommand);
        executor.register(CpCommand);
        executor.register(MvCommand);
        executor.register(ChmodCommand);
        executor.register(ChownCommand);
        executor.register(FindCommand::new(process_executor.clone()));
        executor.register(GrepCommand);
        executor.register(HeadCommand::new(process_executor.clone()));
        executor.register(TailCommand::new(process_executor.clone()));
        executor.register(WcCommand::new(process_executor.clone()));
        executor.register(PsCommand::new(process_executor));
        executor.register(KillCommand);
        executor.register(ExitCommand);

        let summaries = executor
            .commands
            .values()
            .map(|cmd| (cmd.usage(), cmd.description()))
            .collect();
        executor.register(HelpCommand::new(summaries));

        executor
    }

    fn register(&mut self, command: impl Command + 'static) {
        self.commands.insert(command.name(), Box::new(command));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|cmd| cmd.as_ref())
    }

}

fn required_arg(args: &[String]) -> Result<&str, CommandError> {
    args.first()
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument)
}

fn required_pair(args: &[String]) -> Result<(&str, &str), CommandError> {
    match args {
        [first, second, ..] => Ok((first.as_str(), second.as_str())),
        _ => Err(CommandError::MissingArguments),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{Command, CommandResult};
    use crate::core::state::ShellState;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    /// A fresh, empty, canonical directory unique to this test and process.
    pub fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("myshell-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::canonicalize(dir).unwrap()
    }

    pub fn run(cmd: &dyn Command, args: &[&str], state: &mut ShellState) -> (CommandResult, String) {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let result = cmd.execute(&args, state, &mut out);
        (result, String::from_utf8(out).unwrap())
    }
}
