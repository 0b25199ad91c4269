//! ffprobe subprocess execution for per-frame reports.
//!
//! Runs `ffprobe -select_streams <sel> <input> -show_frames`, captures
//! standard output as the raw frame report and standard error for
//! diagnostics. A non-zero exit is an error carrying the exit status and the
//! captured stderr text.

use crate::config::CoreConfig;
use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};

use super::FrameReportProbe;

use std::ffi::OsString;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs ffprobe as a subprocess and returns its frame report.
#[derive(Debug, Clone)]
pub struct CommandFrameProbe {
    ffprobe_path: PathBuf,
    stream_selector: String,
    timeout: Option<Duration>,
}

impl CommandFrameProbe {
    pub fn new(ffprobe_path: impl Into<PathBuf>) -> Self {
        Self {
            ffprobe_path: ffprobe_path.into(),
            stream_selector: crate::config::DEFAULT_STREAM_SELECTOR.to_string(),
            timeout: None,
        }
    }

    pub fn from_config(config: &CoreConfig) -> Self {
        Self {
            ffprobe_path: config.ffprobe_path.clone(),
            stream_selector: config.stream_selector.clone(),
            timeout: config.timeout,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Arguments passed to ffprobe for `input_path`.
    pub fn build_args(&self, input_path: &Path) -> Vec<OsString> {
        vec![
            OsString::from("-select_streams"),
            OsString::from(&self.stream_selector),
            input_path.as_os_str().to_os_string(),
            OsString::from("-show_frames"),
        ]
    }

    fn command_name(&self) -> String {
        self.ffprobe_path.display().to_string()
    }

    fn wait(&self, child: &mut Child) -> CoreResult<ExitStatus> {
        let Some(timeout) = self.timeout else {
            return child.wait().map_err(CoreError::Io);
        };

        let start = Instant::now();
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if start.elapsed() >= timeout {
                log::error!(
                    "{} did not finish within {:.3}s, killing it",
                    self.command_name(),
                    timeout.as_secs_f64()
                );
                // The process may have exited between try_wait and kill.
                let _ = child.kill();
                let _ = child.wait();
                return Err(CoreError::CommandTimeout {
                    command: self.command_name(),
                    timeout,
                });
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl Default for CommandFrameProbe {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_FFPROBE_PATH)
    }
}

impl FrameReportProbe for CommandFrameProbe {
    fn probe_frames(&self, input_path: &Path) -> CoreResult<String> {
        let name = self.command_name();
        let args = self.build_args(input_path);
        log::debug!(
            "Running: {} {}",
            name,
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let mut child = Command::new(&self.ffprobe_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                log::error!("Failed to spawn {}: {}", name, e);
                command_start_error(name.clone(), e)
            })?;

        // Both pipes are drained on their own threads so a large report
        // cannot fill the pipe buffer while we poll for exit.
        let stdout = spawn_reader(child.stdout.take());
        let stderr = spawn_reader(child.stderr.take());

        // On timeout the reader threads are detached rather than joined:
        // grandchildren of a wrapper script can keep the pipes open after
        // the direct child is killed.
        let status = self.wait(&mut child)?;
        let stdout = join_reader(stdout)?;
        let stderr = join_reader(stderr)?;

        let stderr = String::from_utf8_lossy(&stderr);
        if !status.success() {
            log::error!("{} exited with {}: {}", name, status, stderr.trim());
            return Err(command_failed_error(name, status, stderr));
        }

        log::debug!(
            "{} finished: {} bytes of frame report",
            name,
            stdout.len()
        );
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }

    fn describe(&self) -> String {
        format!("{} (streams {})", self.command_name(), self.stream_selector)
    }
}

fn spawn_reader<R>(pipe: Option<R>) -> Option<JoinHandle<io::Result<Vec<u8>>>>
where
    R: Read + Send + 'static,
{
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buf = Vec::new();
            pipe.read_to_end(&mut buf)?;
            Ok(buf)
        })
    })
}

fn join_reader(handle: Option<JoinHandle<io::Result<Vec<u8>>>>) -> CoreResult<Vec<u8>> {
    match handle {
        Some(handle) => handle
            .join()
            .map_err(|_| CoreError::Io(io::Error::other("pipe reader thread panicked")))?
            .map_err(CoreError::Io),
        None => Ok(Vec::new()),
    }
}
