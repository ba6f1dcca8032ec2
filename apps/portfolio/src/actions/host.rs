//! Capabilities provided by the command-line host.

use std::io::ErrorKind;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::actions::clipboard::{Clipboard, Notifier};
use crate::errors::ClipboardError;

const WRITE_TIMEOUT: Duration = Duration::from_secs(5);

/// A clipboard utility invocation, text is piped to its stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        ClipboardCommand {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// System clipboard reached through the platform's clipboard utility.
///
/// Candidates are tried in order; a candidate that cannot be spawned is skipped.
/// The first one that starts decides the result.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    candidates: Vec<ClipboardCommand>,
}

impl SystemClipboard {
    /// Utilities for the current platform and session.
    pub fn detect() -> Self {
        Self::with_commands(platform_commands())
    }

    pub fn with_commands(candidates: Vec<ClipboardCommand>) -> Self {
        SystemClipboard { candidates }
    }
}

fn platform_commands() -> Vec<ClipboardCommand> {
    if cfg!(target_os = "macos") {
        return vec![ClipboardCommand::new("pbcopy", &[])];
    }
    if cfg!(target_os = "windows") {
        return vec![ClipboardCommand::new("clip.exe", &[])];
    }

    let mut commands = Vec::new();
    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        commands.push(ClipboardCommand::new("wl-copy", &[]));
    }
    if std::env::var_os("DISPLAY").is_some() {
        commands.push(ClipboardCommand::new("xclip", &["-selection", "clipboard"]));
        commands.push(ClipboardCommand::new("xsel", &["--clipboard", "--input"]));
    }
    commands
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.candidates.is_empty() {
            return Err(ClipboardError::Unavailable(
                "no clipboard utility for this session".to_string(),
            ));
        }

        for candidate in &self.candidates {
            let spawned = Command::new(&candidate.program)
                .args(&candidate.args)
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .kill_on_drop(true)
                .spawn();

            let mut child = match spawned {
                Ok(child) => child,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!("Clipboard utility '{}' not installed", candidate.program);
                    continue;
                }
                // e.g. permission denied on the binary
                Err(e) => {
                    debug!("Clipboard utility '{}' failed to start: {e}", candidate.program);
                    continue;
                }
            };

            let write = async {
                if let Some(mut stdin) = child.stdin.take() {
                    stdin.write_all(text.as_bytes()).await?;
                    stdin.shutdown().await?;
                }
                child.wait().await
            };

            let status = match tokio::time::timeout(WRITE_TIMEOUT, write).await {
                Ok(Ok(status)) => status,
                Ok(Err(e)) => {
                    return Err(ClipboardError::WriteRejected(format!(
                        "{}: {e}",
                        candidate.program
                    )))
                }
                Err(_) => {
                    return Err(ClipboardError::WriteRejected(format!(
                        "{} timed out",
                        candidate.program
                    )))
                }
            };

            return if status.success() {
                debug!("Clipboard written via '{}'", candidate.program);
                Ok(())
            } else {
                Err(ClipboardError::WriteRejected(format!(
                    "{} exited with {status}",
                    candidate.program
                )))
            };
        }

        Err(ClipboardError::Unavailable(
            "no clipboard utility could be started".to_string(),
        ))
    }
}

/// A host without any clipboard support.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableClipboard;

#[async_trait]
impl Clipboard for UnavailableClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(
            "clipboard not supported by host".to_string(),
        ))
    }
}

/// Prints notifications to stderr, keeping stdout for rendered output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}
