use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File constants
// ---------------------------------------------------------------------------

/// Durable per-step completion record. Deleting it forces a full re-run.
pub const STATUS_FILE: &str = "status.json";

/// Optional configuration file; every field has a default, so the tool runs
/// without one.
pub const CONFIG_FILE: &str = "socforge.yaml";

/// External system-requirements probe, run before the plan starts.
pub const PROBE_SCRIPT: &str = "utils/check_requirements.sh";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn status_path(root: &Path) -> PathBuf {
    root.join(STATUS_FILE)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn probe_path(root: &Path) -> PathBuf {
    root.join(PROBE_SCRIPT)
}

/// Absolute path of an install script given its plan-relative identifier.
pub fn script_path(root: &Path, script: &str) -> PathBuf {
    root.join(script)
}

/// Absolute path of a compose project directory.
pub fn project_dir(root: &Path, dir: &str) -> PathBuf {
    root.join(dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
