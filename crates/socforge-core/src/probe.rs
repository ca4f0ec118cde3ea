//! System-requirements probe, run before the plan starts.
//!
//! The probe itself is an external script; the only contract with it is
//! textual: lines carrying the error marker are collected and everything
//! else is ignored. A non-empty result blocks the plan.

use crate::error::Result;
use crate::paths;
use std::path::Path;
use std::process::{Command, Stdio};

/// Fixed marker the probe prints at the start of each failed check.
pub const ERROR_MARKER: &str = "[ERROR]";

/// Run the requirements probe and collect its reported failures, marker
/// stripped. A root without a probe script reports nothing; the probe is
/// a best-effort collaborator, not a prerequisite.
pub fn run_probe(root: &Path) -> Result<Vec<String>> {
    let script = paths::probe_path(root);
    if !script.is_file() {
        tracing::warn!(
            "no requirements probe at '{}' — skipping the check",
            paths::PROBE_SCRIPT
        );
        return Ok(Vec::new());
    }

    let output = Command::new("bash")
        .arg(&script)
        .current_dir(root)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_errors(&stdout))
}

fn parse_errors(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter_map(|line| {
            line.find(ERROR_MARKER)
                .map(|pos| line[pos + ERROR_MARKER.len()..].trim().to_string())
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn marker_lines_are_collected_and_stripped() {
        let out = "checking memory\n[ERROR] at least 16 GB of RAM required\nchecking disk\n[ERROR] 100 GB of free disk space required\nall other checks passed\n";
        assert_eq!(
            parse_errors(out),
            vec![
                "at least 16 GB of RAM required",
                "100 GB of free disk space required",
            ]
        );
    }

    #[test]
    fn clean_output_reports_nothing() {
        assert!(parse_errors("everything fine\n").is_empty());
        assert!(parse_errors("").is_empty());
    }

    #[test]
    fn missing_probe_script_reports_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(run_probe(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn probe_script_is_executed() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("utils")).unwrap();
        std::fs::write(
            dir.path().join("utils/check_requirements.sh"),
            "#!/bin/bash\necho 'checking'\necho '[ERROR] docker socket not writable'\n",
        )
        .unwrap();

        let errors = run_probe(dir.path()).unwrap();
        assert_eq!(errors, vec!["docker socket not writable"]);
    }

    #[test]
    fn probe_exit_status_is_irrelevant() {
        // Only the marker lines matter; a probe that exits non-zero with no
        // marker lines still passes.
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("utils")).unwrap();
        std::fs::write(
            dir.path().join("utils/check_requirements.sh"),
            "#!/bin/bash\nexit 1\n",
        )
        .unwrap();

        assert!(run_probe(dir.path()).unwrap().is_empty());
    }
}
