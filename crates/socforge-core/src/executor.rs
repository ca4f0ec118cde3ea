//! Subprocess invocation for install scripts and compose lifecycle
//! commands.
//!
//! Both step kinds share the same contract: stdout/stderr are captured,
//! never streamed (the operator only sees the plan runner's message
//! strings), and a non-zero exit is an ordinary `Outcome::Failure`, not an
//! error.

use crate::error::{ForgeError, Result};
use crate::plan::ComposeAction;
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured diagnostics are tail-capped so a verbose installer cannot blow
/// up memory or the terminal.
const MAX_DIAGNOSTIC: usize = 10 * 1024;

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Classification of one external invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

// ---------------------------------------------------------------------------
// ComposeTool
// ---------------------------------------------------------------------------

/// The available compose front-ends, in priority order: the `docker
/// compose` plugin, then the legacy standalone `docker-compose` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeTool {
    DockerPlugin,
    Legacy,
}

impl ComposeTool {
    /// Detect the best available compose front-end. Resolved once, before
    /// any project step runs, so a missing runtime fails the collection up
    /// front instead of mid-plan.
    pub fn detect() -> Result<Self> {
        if which::which("docker").is_ok() {
            return Ok(ComposeTool::DockerPlugin);
        }
        if which::which("docker-compose").is_ok() {
            return Ok(ComposeTool::Legacy);
        }
        Err(ForgeError::ComposeToolMissing)
    }

    fn command(&self) -> Command {
        match self {
            ComposeTool::DockerPlugin => {
                let mut cmd = Command::new("docker");
                cmd.arg("compose");
                cmd
            }
            ComposeTool::Legacy => Command::new("docker-compose"),
        }
    }
}

// ---------------------------------------------------------------------------
// Step invocation
// ---------------------------------------------------------------------------

/// Run one install script, identified by its plan-relative path, from the
/// deployment root. The caller has already checked the file exists.
pub fn run_script(root: &Path, script: &str) -> Outcome {
    let mut cmd = Command::new("bash");
    cmd.arg(script).current_dir(root);
    run_captured(cmd)
}

/// Run one compose lifecycle sub-command with the project directory as the
/// working directory.
pub fn run_compose(tool: ComposeTool, project_dir: &Path, action: ComposeAction) -> Outcome {
    let mut cmd = tool.command();
    cmd.args(action.args()).current_dir(project_dir);
    run_captured(cmd)
}

fn run_captured(mut cmd: Command) -> Outcome {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let output = match cmd.output() {
        Ok(o) => o,
        Err(e) => return Outcome::Failure(format!("failed to spawn: {e}")),
    };

    if output.status.success() {
        return Outcome::Success;
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let diagnostic = tail_capped(stderr.trim());
    if diagnostic.is_empty() {
        Outcome::Failure(format!("process exited with {}", output.status))
    } else {
        Outcome::Failure(diagnostic)
    }
}

/// Keep the tail of verbose output; the end of an installer log is where
/// the actual error lives.
fn tail_capped(text: &str) -> String {
    if text.len() <= MAX_DIAGNOSTIC {
        return text.to_string();
    }
    let start = text.len() - MAX_DIAGNOSTIC;
    // Don't split a UTF-8 sequence mid-character.
    let start = (start..text.len())
        .find(|i| text.is_char_boundary(*i))
        .unwrap_or(start);
    text[start..].to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
