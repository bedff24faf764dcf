use std::io::Write;

use super::{required_arg, Command, CommandError, CommandResult, Flow};
use crate::core::state::ShellState;
use crate::process::signal::{parse_signal, send_signal};
use crate::process::ProcessExecutor;

#[derive(Clone)]
pub struct PsCommand {
    process_executor: ProcessExecutor,
}

impl PsCommand {
    pub fn new(process_executor: ProcessExecutor) -> Self {
        Self { process_executor }
    }
}

impl Command for PsCommand {
    fn name(&self) -> &'static str {
        "ps"
    }

    fn usage(&self) -> &'static str {
        "ps"
    }

    fn description(&self) -> &'static str {
        "Lists processes"
    }

    fn execute(&self, _args: &[String], state: &mut ShellState, out: &mut dyn Write) -> CommandResult {
        let stdout = self
            .process_executor
            .capture("ps", &["aux"], state.current_dir())?;
        out.write_all(&stdout)?;
        Ok(Flow::Continue)
    }
}

/// `kill pid [signal]`, defaulting to TERM.
#[derive(Clone)]
pub struct KillCommand;

impl Command for KillCommand {
    fn name(&self) -> &'static str {
        "kill"
    }

    fn usage(&self) -> &'static str {
        "kill [pid] [signal]"
    }

    fn description(&self) -> &'static str {
        "Sends a signal to a process"
    }

    fn execute(&self, args: &[String], _state: &mut ShellState, _out: &mut dyn Write) -> CommandResult {
        let pid_arg = required_arg(args)?;
        let pid = pid_arg
            .parse::<i32>()
            .ok()
            .filter(|pid| *pid > 0)
            .ok_or_else(|| CommandError::InvalidArgument(format!("invalid pid: '{}'", pid_arg)))?;

        let signal_arg = args.get(1).map(String::as_str).unwrap_or("TERM");
        let signal = parse_signal(signal_arg).ok_or_else(|| {
            CommandError::InvalidArgument(format!("invalid signal: '{}'", signal_arg))
        })?;

        log::debug!("sending signal {} to {}", signal, pid);
        send_signal(pid, signal)?;
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::test_support::{run, scratch_dir};
    use std::process::Command as Child;

    #[test]
    fn test_ps_lists_this_process() {
        let mut state = ShellState::with_dir(scratch_dir("ps"));
        let ps = PsCommand::new(ProcessExecutor::default());

        let (result, output) = run(&ps, &[], &mut state);
        assert!(result.is_ok());
        assert!(output.contains("PID"));
        let pid = std::process::id().to_string();
        assert!(output
            .lines()
            .any(|line| line.split_whitespace().nth(1) == Some(pid.as_str())));
    }

    #[test]
    fn test_kill_child() {
        let mut state = ShellState::with_dir("/");
        let mut child = Child::new("sleep").arg("30").spawn().unwrap();
        let pid = child.id().to_string();

        let (result, _) = run(&KillCommand, &[pid.as_str(), "KILL"], &mut state);
        assert!(result.is_ok());
        assert!(!child.wait().unwrap().success());
    }

    #[test]
    fn test_kill_invalid_arguments() {
        let mut state = ShellState::with_dir("/");

        let cases: [&[&str]; 4] = [&["abc"], &["0"], &["-5"], &["1", "NOPE"]];
        for args in cases {
            let (result, _) = run(&KillCommand, args, &mut state);
            assert!(
                matches!(result, Err(CommandError::InvalidArgument(_))),
                "{:?} was accepted",
                args
            );
        }
    }
}
