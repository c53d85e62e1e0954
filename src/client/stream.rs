//! Line-by-line streaming of summarize output.
//!
//! [`SummaryStream`] owns the child process. stdout is read lazily, one
//! line per `next()`; stderr is drained on a helper thread from the start so
//! the child never stalls on a full stderr pipe while we wait on stdout.
//!
//! Failures only show up once stdout ends: the final item is an `Err` when
//! the process exited unsuccessfully, after every line it printed has already
//! been yielded.

use std::io::{BufRead, BufReader, Read};
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, Stdio};
use std::thread::JoinHandle;

use super::exec::classify_exit;
use super::text_input::TextInput;
use crate::error::{Result, SummarizeError};

/// Lazy, finite sequence of output lines from one summarize run.
///
/// Each item is one line including its trailing newline (the last line may
/// lack one). Dropping the stream before it ends kills and reaps the child.
pub struct SummaryStream {
    child: Child,
    program: PathBuf,
    stdout: Option<BufReader<ChildStdout>>,
    stderr: Option<JoinHandle<String>>,
    finished: bool,
    text_input: Option<TextInput>,
}

impl SummaryStream {
    pub(crate) fn spawn(mut cmd: Command, program: &Path) -> Result<Self> {
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|source| SummarizeError::Spawn {
            binary: program.to_path_buf(),
            source,
        })?;
        tracing::debug!("streaming summarize (pid {})", child.id());

        let stdout = child.stdout.take().map(BufReader::new);
        let stderr = child.stderr.take().map(|mut pipe| {
            std::thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = pipe.read_to_end(&mut buf);
                String::from_utf8_lossy(&buf).into_owned()
            })
        });

        Ok(Self {
            child,
            program: program.to_path_buf(),
            stdout,
            stderr,
            finished: false,
            text_input: None,
        })
    }

    /// Keep a text input file alive for as long as the stream runs.
    pub(crate) fn with_text_input(mut self, input: TextInput) -> Self {
        self.text_input = Some(input);
        self
    }

    /// Binary this stream is reading from.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Process id of the running child.
    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Drain the stream, handing each line to `on_chunk` as it arrives.
    ///
    /// Returns the concatenation of all lines on success. On failure the
    /// callback has already seen every line printed before the error.
    pub fn collect_with<F>(mut self, mut on_chunk: F) -> Result<String>
    where
        F: FnMut(&str),
    {
        let mut full_output = String::new();
        for line in &mut self {
            let line = line?;
            on_chunk(&line);
            full_output.push_str(&line);
        }
        Ok(full_output)
    }

    /// Wait for the child after stdout closed and classify its exit.
    fn finish(&mut self) -> Result<()> {
        self.finished = true;
        self.stdout = None;

        let status = self.child.wait()?;
        let stderr = self
            .stderr
            .take()
            .map(|handle| handle.join().unwrap_or_default())
            .unwrap_or_default();

        classify_exit(status, &stderr)
    }

    /// Stop early: kill the child and reap it.
    ///
    /// The stderr thread is detached rather than joined; grandchildren of
    /// the killed process may still hold the pipe open.
    fn abort(&mut self) {
        self.finished = true;
        self.stdout = None;
        self.stderr = None;
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

impl Iterator for SummaryStream {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(reader) = self.stdout.as_mut() else {
            return self.finish().err().map(Err);
        };

        let mut line = Vec::new();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => self.finish().err().map(Err),
            Ok(_) => Some(Ok(String::from_utf8_lossy(&line).into_owned())),
            Err(e) => {
                self.abort();
                Some(Err(SummarizeError::Io(e)))
            }
        }
    }
}

impl FusedIterator for SummaryStream {}

impl Drop for SummaryStream {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!("summary stream dropped early, killing pid {}", self.child.id());
            self.abort();
        }
    }
}

impl std::fmt::Debug for SummaryStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryStream")
            .field("program", &self.program)
            .field("pid", &self.child.id())
            .field("finished", &self.finished)
            .finish()
    }
}
