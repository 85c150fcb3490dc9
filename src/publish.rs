//! Destinations for generated text besides the file the tools always write.
//!
//! The bundler never talks to the clipboard directly; it is handed a
//! [`Publisher`], which keeps collection testable without a desktop session.

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::{Command, Stdio},
};

use log::{debug, info, warn};

use crate::config::PublishTarget;
use crate::errors::{StyleKitError, StyleKitResult};

pub trait Publisher {
    fn publish(&mut self, text: &str) -> StyleKitResult<()>;

    /// Short human-readable name of the destination.
    fn describe(&self) -> &str;
}

/// Builds the publisher selected on the command line.
pub fn publisher_for(target: PublishTarget) -> Box<dyn Publisher> {
    match target {
        PublishTarget::Clipboard => Box::new(ClipboardPublisher::system()),
        PublishTarget::Stdout => Box::new(StdoutPublisher),
        PublishTarget::None => Box::new(NullPublisher),
    }
}

// ============================================================================
// IN-PROCESS PUBLISHERS
// ============================================================================

/// Collects published text in memory.
#[derive(Debug, Default)]
pub struct BufferPublisher {
    pub buffer: String,
}

impl BufferPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Publisher for BufferPublisher {
    fn publish(&mut self, text: &str) -> StyleKitResult<()> {
        self.buffer.push_str(text);
        Ok(())
    }

    fn describe(&self) -> &str {
        "buffer"
    }
}

pub struct NullPublisher;

impl Publisher for NullPublisher {
    fn publish(&mut self, _text: &str) -> StyleKitResult<()> {
        Ok(())
    }

    fn describe(&self) -> &str {
        "nowhere"
    }
}

pub struct StdoutPublisher;

impl Publisher for StdoutPublisher {
    fn publish(&mut self, text: &str) -> StyleKitResult<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|source| StyleKitError::Publish {
                target: "stdout".to_string(),
                source,
            })
    }

    fn describe(&self) -> &str {
        "stdout"
    }
}

pub struct FilePublisher {
    path: PathBuf,
    label: String,
}

impl FilePublisher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }
}

impl Publisher for FilePublisher {
    fn publish(&mut self, text: &str) -> StyleKitResult<()> {
        fs::write(&self.path, text).map_err(|e| StyleKitError::write(&self.path, e))
    }

    fn describe(&self) -> &str {
        &self.label
    }
}

// ============================================================================
// CLIPBOARD
// ============================================================================

#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[&[&str]] = &[&["pbcopy"]];

#[cfg(windows)]
const CLIPBOARD_COMMANDS: &[&[&str]] = &[&["clip"]];

#[cfg(not(any(target_os = "macos", windows)))]
const CLIPBOARD_COMMANDS: &[&[&str]] = &[
    &["wl-copy"],
    &["xclip", "-selection", "clipboard"],
    &["xsel", "--clipboard", "--input"],
];

/// Pipes text into the first clipboard command that accepts it. Commands that
/// are missing or fail (e.g. `wl-copy` outside a Wayland session) are skipped.
pub struct ClipboardPublisher {
    candidates: Vec<(String, Vec<String>)>,
}

impl ClipboardPublisher {
    /// Clipboard commands for the current platform, in preference order.
    pub fn system() -> Self {
        Self::with_commands(CLIPBOARD_COMMANDS)
    }

    /// Each command is a program followed by its arguments.
    pub fn with_commands(commands: &[&[&str]]) -> Self {
        let candidates = commands
            .iter()
            .filter_map(|command| command.split_first())
            .map(|(program, args)| {
                (
                    program.to_string(),
                    args.iter().map(|a| a.to_string()).collect(),
                )
            })
            .collect();
        Self { candidates }
    }

    fn pipe_into(program: &str, args: &[String], text: &str) -> io::Result<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // stdin drops with the match arm, so the command sees EOF before the wait
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait()?;
        written?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{program} exited with {status}"),
            ))
        }
    }
}

impl Publisher for ClipboardPublisher {
    fn publish(&mut self, text: &str) -> StyleKitResult<()> {
        let mut last_failure = None;
        for (program, args) in &self.candidates {
            match Self::pipe_into(program, args, text) {
                Ok(()) => {
                    info!("copied {} bytes to clipboard via {program}", text.len());
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!("clipboard command {program} not available");
                }
                Err(e) => {
                    warn!("clipboard command {program} failed: {e}");
                    last_failure = Some((program, e));
                }
            }
        }

        if let Some((program, source)) = last_failure {
            return Err(StyleKitError::Publish {
                target: format!("clipboard ({program})"),
                source,
            });
        }

        let tried = self
            .candidates
            .iter()
            .map(|(program, _)| program.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Err(StyleKitError::ClipboardUnavailable { tried })
    }

    fn describe(&self) -> &str {
        "clipboard"
    }
}
