use std::env;
use std::io::{self, IsTerminal, Write};

mod dispatch;

pub use dispatch::Dispatcher;

use crate::{
    core::{commands::Flow, config::Config, state::ShellState},
    error::ShellError,
    flags::Flags,
    highlight::Highlighter,
    input::{EditorSource, LineSource, ReadOutcome, ReaderSource},
    process::{Interpreter, ProcessExecutor},
};

pub const FAREWELL: &str = "Goodbye!";

/// The read-dispatch loop.
pub struct Shell {
    input: Box<dyn LineSource>,
    dispatcher: Dispatcher,
    prompt: String,
}

impl Shell {
    pub fn new(flags: &Flags) -> Result<Self, ShellError> {
        let config = Config::load(flags.get_value("config"))?;
        let quiet = flags.is_set("quiet");

        let interpreter = config
            .interpreter
            .as_deref()
            .map(Interpreter::new)
            .unwrap_or_default();
        log::debug!("fallback interpreter is {}", interpreter.program());

        let highlighter = Highlighter::new(config.color);
        let dispatcher = Dispatcher::new(ProcessExecutor::new(interpreter), ShellState::new()?)
            .with_highlighter(highlighter);

        // Children share our process group; keep the shell alive when they get SIGINT.
        let notice = highlighter.highlight_notice("Use 'exit' to exit the shell");
        if let Err(e) = ctrlc::set_handler(move || {
            if !quiet {
                eprintln!("\n{}", notice);
            }
        }) {
            log::warn!("could not install Ctrl-C handler: {}", e);
        }

        let input: Box<dyn LineSource> = if io::stdin().is_terminal() {
            Box::new(EditorSource::new()?)
        } else {
            Box::new(ReaderSource::new(io::stdin().lock()))
        };

        Ok(Shell::with_input(input, dispatcher, config.prompt))
    }

    pub fn with_input(input: Box<dyn LineSource>, dispatcher: Dispatcher, prompt: String) -> Self {
        Shell {
            input,
            dispatcher,
            prompt,
        }
    }

    pub fn run(&mut self) {
        self.run_with(&mut io::stdout(), &mut io::stderr())
    }

    /// Loops until end of input or `exit`, then prints the farewell.
    ///
    /// A failed write (e.g. a closed pipe) ends the session like end of
    /// input does; it is logged, never returned.
    pub fn run_with(&mut self, out: &mut dyn Write, err: &mut dyn Write) {
        loop {
            match self.input.read_line(&self.prompt, out) {
                Ok(ReadOutcome::Line(line)) => {
                    let dispatched = self
                        .dispatcher
                        .dispatch(&line, out, err)
                        .and_then(|flow| out.flush().map(|()| flow));
                    self.sync_working_dir();

                    let flow = match dispatched {
                        Ok(flow) => flow,
                        Err(e) => {
                            log::error!("cannot write output: {}", e);
                            break;
                        }
                    };

                    if flow == Flow::Exit {
                        break;
                    }
                }
                Ok(ReadOutcome::Interrupted) => continue,
                Ok(ReadOutcome::Eof) => break,
                Err(e) => {
                    log::error!("cannot read input: {}", e);
                    break;
                }
            }
        }

        if let Err(e) = writeln!(out, "{}", FAREWELL).and_then(|()| out.flush()) {
            log::error!("cannot write farewell: {}", e);
        }
    }

    /// Mirrors a successful `cd` into the process working directory.
    fn sync_working_dir(&mut self) {
        let state = self.dispatcher.state_mut();
        if !state.take_dir_change() {
            return;
        }

        if let Err(e) = env::set_current_dir(state.current_dir()) {
            log::warn!(
                "could not enter {}: {}",
                state.current_dir().display(),
                e
            );
        }
    }
}
