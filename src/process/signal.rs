use std::io;

use signal_hook::consts::signal::{
    SIGABRT, SIGALRM, SIGCHLD, SIGCONT, SIGHUP, SIGINT, SIGKILL, SIGPIPE, SIGQUIT, SIGSTOP,
    SIGTERM, SIGTSTP, SIGUSR1, SIGUSR2, SIGWINCH,
};

use super::ProcessError;

const SIGNALS: &[(&str, i32)] = &[
    ("HUP", SIGHUP),
    ("INT", SIGINT),
    ("QUIT", SIGQUIT),
    ("ABRT", SIGABRT),
    ("KILL", SIGKILL),
    ("USR1", SIGUSR1),
    ("USR2", SIGUSR2),
    ("PIPE", SIGPIPE),
    ("ALRM", SIGALRM),
    ("TERM", SIGTERM),
    ("CHLD", SIGCHLD),
    ("CONT", SIGCONT),
    ("STOP", SIGSTOP),
    ("TSTP", SIGTSTP),
    ("WINCH", SIGWINCH),
];

/// Accepts `TERM`, `SIGTERM`, `sigterm` or a number such as `15`.
pub fn parse_signal(signal: &str) -> Option<i32> {
    if let Ok(number) = signal.parse::<i32>() {
        return (number >= 0).then_some(number);
    }

    let upper = signal.to_ascii_uppercase();
    let name = upper.strip_prefix("SIG").unwrap_or(&upper);
    SIGNALS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|&(_, number)| number)
}

/// Sends `signal` to a single process. Process-group ids are refused.
pub fn send_signal(pid: i32, signal: i32) -> Result<(), ProcessError> {
    if pid <= 0 {
        return Err(ProcessError::Signal(io::Error::from_raw_os_error(
            libc::ESRCH,
        )));
    }

    let rc = unsafe { libc::kill(pid as libc::pid_t, signal) };
    if rc == -1 {
        return Err(ProcessError::Signal(io::Error::last_os_error()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;

    #[test]
    fn test_parse_signal_forms() {
        assert_eq!(parse_signal("TERM"), Some(SIGTERM));
        assert_eq!(parse_signal("SIGKILL"), Some(SIGKILL));
        assert_eq!(parse_signal("sigint"), Some(SIGINT));
        assert_eq!(parse_signal("9"), Some(9));
        assert_eq!(parse_signal("0"), Some(0));
        assert_eq!(parse_signal("-1"), None);
        assert_eq!(parse_signal("BOGUS"), None);
    }

    #[test]
    fn test_send_signal_terminates_child() {
        let mut child = Command::new("sleep").arg("30").spawn().unwrap();
        send_signal(child.id() as i32, SIGTERM).unwrap();
        let status = child.wait().unwrap();
        assert!(!status.success());
    }

    #[test]
    fn test_send_signal_rejects_group_ids() {
        assert!(send_signal(0, SIGTERM).is_err());
        assert!(send_signal(-1, SIGTERM).is_err());
    }
}
