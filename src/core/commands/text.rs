use std::ffi::OsString;
use std::fs;
use std::io::Write;

use super::{required_arg, required_pair, Command, CommandError, CommandResult, Flow};
use crate::core::state::ShellState;
use crate::process::ProcessExecutor;

const DEFAULT_LINES: usize = 10;

/// Plain substring match, one file.
#[derive(Clone)]
pub struct GrepCommand;

impl Command for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    fn usage(&self) -> &'static str {
        "grep [pattern] [file]"
    }

    fn description(&self) -> &'static str {
        "Searches for a pattern in a file"
    }

    fn execute(&self, args: &[String], state: &mut ShellState, out: &mut dyn Write) -> CommandResult {
        let (pattern, file) = required_pair(args)?;
        let bytes = fs::read(state.resolve(file))?;
        let contents = String::from_utf8_lossy(&bytes);

        for line in contents.lines().filter(|line| line.contains(pattern)) {
            writeln!(out, "{}", line)?;
        }
        Ok(Flow::Continue)
    }
}

fn line_count(args: &[String]) -> Result<usize, CommandError> {
    match args.get(1) {
        None => Ok(DEFAULT_LINES),
        Some(count) => count
            .parse()
            .map_err(|_| CommandError::InvalidArgument(format!("invalid line count: '{}'", count))),
    }
}

/// Runs a host text utility on one file and copies its stdout through.
/// The file always follows `--`, so a name like `-L` is never an option.
fn delegate(
    process_executor: &ProcessExecutor,
    program: &str,
    mut args: Vec<OsString>,
    file: &str,
    state: &ShellState,
    out: &mut dyn Write,
) -> CommandResult {
    args.push("--".into());
    args.push(state.expand(file).into_os_string());
    let stdout = process_executor.capture(program, &args, state.current_dir())?;
    out.write_all(&stdout)?;
    Ok(Flow::Continue)
}

#[derive(Clone)]
pub struct HeadCommand {
    process_executor: ProcessExecutor,
}

impl HeadCommand {
    pub fn new(process_executor: ProcessExecutor) -> Self {
        Self { process_executor }
    }
}

impl Command for HeadCommand {
    fn name(&self) -> &'static str {
        "head"
    }

    fn usage(&self) -> &'static str {
        "head [file] [lines]"
    }

    fn description(&self) -> &'static str {
        "Prints the first few lines of a file"
    }

    fn execute(&self, args: &[String], state: &mut ShellState, out: &mut dyn Write) -> CommandResult {
        let file = required_arg(args)?;
        let lines = line_count(args)?;
        let head_args: Vec<OsString> = vec!["-n".into(), lines.to_string().into()];
        delegate(&self.process_executor, "head", head_args, file, state, out)
    }
}

#[derive(Clone)]
pub struct TailCommand {
    process_executor: ProcessExecutor,
}

impl TailCommand {
    pub fn new(process_executor: ProcessExecutor) -> Self {
        Self { process_executor }
    }
}

impl Command for TailCommand {
    fn name(&self) -> &'static str {
        "tail"
    }

    fn usage(&self) -> &'static str {
        "tail [file] [lines]"
    }

    fn description(&self) -> &'static str {
        "Prints the last few lines of a file"
    }

    fn execute(&self, args: &[String], state: &mut ShellState, out: &mut dyn Write) -> CommandResult {
        let file = required_arg(args)?;
        let lines = line_count(args)?;
        let tail_args: Vec<OsString> = vec!["-n".into(), lines.to_string().into()];
        delegate(&self.process_executor, "tail", tail_args, file, state, out)
    }
}

#[derive(Clone)]
pub struct WcCommand {
    process_executor: ProcessExecutor,
}

impl WcCommand {
    pub fn new(process_executor: ProcessExecutor) -> Self {
        Self { process_executor }
    }
}

impl Command for WcCommand {
    fn name(&self) -> &'static str {
        "wc"
    }

    fn usage(&self) -> &'static str {
        "wc [file]"
    }

    fn description(&self) -> &'static str {
        "Counts lines, words, and characters in a file"
    }

    fn execute(&self, args: &[String], state: &mut ShellState, out: &mut dyn Write) -> CommandResult {
        let file = required_arg(args)?;
        delegate(&self.process_executor, "wc", Vec::new(), file, state, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::test_support::{run, scratch_dir};

    fn numbered_file(name: &str, count: usize) -> ShellState {
        let dir = scratch_dir(name);
        let contents: String = (1..=count).map(|n| format!("line {}\n", n)).collect();
        fs::write(dir.join("numbers.txt"), contents).unwrap();
        ShellState::with_dir(dir)
    }

    #[test]
    fn test_grep_substring() {
        let dir = scratch_dir("grep");
        fs::write(dir.join("f"), "apple pie\nbanana\npineapple\n").unwrap();
        let mut state = ShellState::with_dir(&dir);

        let (result, output) = run(&GrepCommand, &["apple", "f"], &mut state);
        assert!(result.is_ok());
        assert_eq!(output, "apple pie\npineapple\n");

        let (result, output) = run(&GrepCommand, &["a.p", "f"], &mut state);
        assert!(result.is_ok());
        assert_eq!(output, "");

        let (result, _) = run(&GrepCommand, &["x", "missing"], &mut state);
        assert!(matches!(result, Err(CommandError::IoError(_))));
    }

    #[test]
    fn test_grep_invalid_utf8() {
        let dir = scratch_dir("grep-lossy");
        fs::write(dir.join("f"), b"caf\xe9 match\nother\n").unwrap();
        let mut state = ShellState::with_dir(&dir);

        let (result, output) = run(&GrepCommand, &["match", "f"], &mut state);
        assert!(result.is_ok());
        assert_eq!(output, "caf\u{FFFD} match\n");
    }

    #[test]
    fn test_head_default_and_count() {
        let mut state = numbered_file("head", 12);
        let head = HeadCommand::new(ProcessExecutor::default());

        let (_, output) = run(&head, &["numbers.txt"], &mut state);
        assert_eq!(output.lines().count(), 10);
        assert!(output.starts_with("line 1\n"));

        let (_, output) = run(&head, &["numbers.txt", "2"], &mut state);
        assert_eq!(output, "line 1\nline 2\n");
    }

    #[test]
    fn test_tail_count() {
        let mut state = numbered_file("tail", 12);
        let tail = TailCommand::new(ProcessExecutor::default());

        let (_, output) = run(&tail, &["numbers.txt", "3"], &mut state);
        assert_eq!(output, "line 10\nline 11\nline 12\n");
    }

    #[test]
    fn test_invalid_line_count() {
        let mut state = numbered_file("head-invalid", 1);
        let head = HeadCommand::new(ProcessExecutor::default());

        let (result, _) = run(&head, &["numbers.txt", "ten"], &mut state);
        assert!(matches!(result, Err(CommandError::InvalidArgument(_))));
    }

    #[test]
    fn test_wc_counts() {
        let dir = scratch_dir("wc");
        fs::write(dir.join("f"), "one two\nthree\n").unwrap();
        let mut state = ShellState::with_dir(&dir);
        let wc = WcCommand::new(ProcessExecutor::default());

        let (result, output) = run(&wc, &["f"], &mut state);
        assert!(result.is_ok());
        let counts: Vec<&str> = output.split_whitespace().collect();
        assert_eq!(counts, ["2", "3", "14", "f"]);
    }

    #[test]
    fn test_dash_file_names_are_not_options() {
        let dir = scratch_dir("dash-names");
        fs::write(dir.join("-L"), "one two\nthree\n").unwrap();
        let mut state = ShellState::with_dir(&dir);

        let wc = WcCommand::new(ProcessExecutor::default());
        let (result, output) = run(&wc, &["-L"], &mut state);
        assert!(result.is_ok());
        let counts: Vec<&str> = output.split_whitespace().collect();
        assert_eq!(counts, ["2", "3", "14", "-L"]);

        let head = HeadCommand::new(ProcessExecutor::default());
        let (result, output) = run(&head, &["-L", "1"], &mut state);
        assert!(result.is_ok());
        assert_eq!(output, "one two\n");

        let tail = TailCommand::new(ProcessExecutor::default());
        let (result, _) = run(&tail, &["-v"], &mut state);
        assert!(matches!(result, Err(CommandError::ProcessError(_))));
    }

    #[test]
    fn test_delegated_failure_reports_stderr() {
        let dir = scratch_dir("wc-missing");
        let mut state = ShellState::with_dir(&dir);
        let wc = WcCommand::new(ProcessExecutor::default());

        let (result, _) = run(&wc, &["missing"], &mut state);
        let err = result.unwrap_err();
        assert!(matches!(err, CommandError::ProcessError(_)));
        assert!(err.to_string().contains("missing"));
    }
}
