use tracing::info;

#[cfg(any(windows, test))]
use std::io;

#[cfg(windows)]
use std::process::{Command, Stdio};

#[cfg(unix)]
use nix::sys::signal::{self, Signal};
#[cfg(unix)]
use nix::unistd::Pid;

/// Ends the process identified by `pid`. The exit route talks to this
/// trait so tests can substitute a recording implementation.
pub trait Terminator: Send + Sync {
    fn terminate(&self, pid: u32);
}

/// Terminator that really takes the server down.
pub struct SystemTerminator;

impl Terminator for SystemTerminator {
    fn terminate(&self, pid: u32) {
        info!("goodbye");
        terminate_process(pid);
    }
}

#[cfg(any(windows, test))]
#[derive(Debug, thiserror::Error)]
enum TreeKillError {
    #[error("exit-button/io: {0}")]
    IO(#[from] io::Error),
    #[error("taskkill exited with {0}")]
    NonZeroExit(std::process::ExitStatus),
}

// Signaling the parent alone can leave detached children running on
// Windows, so the whole tree is killed externally first.
#[cfg(windows)]
fn terminate_process(pid: u32) {
    kill_tree_then_exit(pid, kill_tree, || std::process::exit(0));
}

#[cfg(unix)]
fn terminate_process(pid: u32) {
    // Default SIGTERM semantics end the process.
    let _ = signal::kill(Pid::from_raw(pid as i32), Signal::SIGTERM);
}

#[cfg(windows)]
fn kill_tree(pid: u32) -> Result<(), TreeKillError> {
    let status = Command::new("taskkill")
        .args(["/F", "/T", "/PID", &pid.to_string()])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()?;
    if !status.success() {
        return Err(TreeKillError::NonZeroExit(status));
    }
    Ok(())
}

// The tree-kill outcome is discarded; the exit below runs regardless.
#[cfg(any(windows, test))]
fn kill_tree_then_exit<K, E>(pid: u32, kill_tree: K, exit: E)
where
    K: FnOnce(u32) -> Result<(), TreeKillError>,
    E: FnOnce(),
{
    let _ = kill_tree(pid);
    exit();
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_kill_tree_then_exit() {
        let mut exited = false;
        kill_tree_then_exit(
            42,
            |pid| {
                assert_eq!(pid, 42);
                Ok(())
            },
            || exited = true,
        );
        assert!(exited);
    }

    #[test]
    fn test_kill_tree_then_exit_failing_tree_kill() {
        let mut exited = false;
        kill_tree_then_exit(
            42,
            |_| {
                Err(TreeKillError::IO(io::Error::new(
                    io::ErrorKind::NotFound,
                    "no taskkill",
                )))
            },
            || exited = true,
        );
        assert!(exited);
    }

    #[cfg(unix)]
    #[test]
    fn test_terminate_process_sends_sigterm() {
        let mut child = std::process::Command::new("sleep")
            .arg("60")
            .spawn()
            .expect("failed to spawn sleep");

        terminate_process(child.id());

        let mut status = None;
        for _ in 0..50 {
            if let Some(s) = child.try_wait().unwrap() {
                status = Some(s);
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(100));
        }
        assert!(!status.expect("sleep did not exit after SIGTERM").success());
    }
}
