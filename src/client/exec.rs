//! Buffered execution and exit status classification.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{Result, SummarizeError};

/// Run `cmd` to completion and return its stdout.
///
/// stdout and stderr are drained concurrently by `Command::output`, so a
/// chatty child cannot block on a full pipe.
pub(crate) fn run_buffered(mut cmd: Command, program: &Path) -> Result<String> {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let output = cmd.output().map_err(|source| SummarizeError::Spawn {
        binary: program.to_path_buf(),
        source,
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr);
    tracing::debug!(
        "summarize exited with {:?} ({} bytes stdout, {} bytes stderr)",
        output.status.code(),
        output.stdout.len(),
        output.stderr.len()
    );

    classify_exit(output.status, &stderr)?;
    Ok(stdout)
}

/// Map a finished process's status to success or a typed error.
///
/// - exit 0 → `Ok(())`
/// - exit 130 → [`SummarizeError::Interrupted`]
/// - exit 143 → [`SummarizeError::Terminated`]
/// - any other code → [`SummarizeError::CommandFailed`] with trimmed stderr
/// - no code (Unix, killed by a signal) → mapped by signal number
pub fn classify_exit(status: ExitStatus, stderr: &str) -> Result<()> {
    if status.success() {
        return Ok(());
    }

    match status.code() {
        Some(130) => Err(SummarizeError::Interrupted),
        Some(143) => Err(SummarizeError::Terminated),
        Some(code) => Err(SummarizeError::CommandFailed {
            code,
            stderr: stderr.trim().to_string(),
        }),
        None => Err(classify_signal(status, stderr)),
    }
}

#[cfg(unix)]
fn classify_signal(status: ExitStatus, stderr: &str) -> SummarizeError {
    use std::os::unix::process::ExitStatusExt;

    match status.signal() {
        Some(libc::SIGINT) => SummarizeError::Interrupted,
        Some(libc::SIGTERM) => SummarizeError::Terminated,
        Some(signal) => SummarizeError::Signaled(signal),
        None => SummarizeError::CommandFailed {
            code: -1,
            stderr: stderr.trim().to_string(),
        },
    }
}

#[cfg(not(unix))]
fn classify_signal(_status: ExitStatus, stderr: &str) -> SummarizeError {
    SummarizeError::CommandFailed {
        code: -1,
        stderr: stderr.trim().to_string(),
    }
}
