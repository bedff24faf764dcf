use std::io::{self, Write};

use crate::core::commands::{CommandExecutor, Flow};
use crate::core::state::ShellState;
use crate::highlight::Highlighter;
use crate::process::ProcessExecutor;

/// Routes one command line to a builtin or to the OS interpreter.
pub struct Dispatcher {
    executor: CommandExecutor,
    process_executor: ProcessExecutor,
    state: ShellState,
    highlighter: Highlighter,
}

impl Dispatcher {
    pub fn new(process_executor: ProcessExecutor, state: ShellState) -> Self {
        Self {
            executor: CommandExecutor::new(process_executor.clone()),
            process_executor,
            state,
            highlighter: Highlighter::plain(),
        }
    }

    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    pub fn state_mut(&mut self) -> &mut ShellState {
        &mut self.state
    }

    /// Runs `line` to completion. Command failures are written to `err`
    /// and never returned; the `io::Error` only covers the writers.
    pub fn dispatch(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<Flow> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, rest)) = tokens.split_first() else {
            return Ok(Flow::Continue);
        };

        let Some(command) = self.executor.get(name) else {
            return self.run_external(line, out, err);
        };

        log::debug!("builtin {} with {} argument(s)", name, rest.len());
        let args: Vec<String> = rest.iter().map(|s| s.to_string()).collect();
        match command.execute(&args, &mut self.state, out) {
            Ok(flow) => Ok(flow),
            Err(e) => {
                let message = format!("{}: {}", name, e);
                writeln!(err, "{}", self.highlighter.highlight_error(&message))?;
                Ok(Flow::Continue)
            }
        }
    }

    fn run_external(
        &self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<Flow> {
        log::debug!("forwarding to interpreter: {}", line);
        match self.process_executor.run_line(line, self.state.current_dir()) {
            Ok(stdout) => out.write_all(&stdout)?,
            Err(e) => {
                let message = format!("Error: {}", e);
                writeln!(err, "{}", self.highlighter.highlight_error(&message))?;
            }
        }
        Ok(Flow::Continue)
    }
}
