//! Best-effort retrieval of generated credentials from container logs.
//!
//! DFIR-IRIS generates its administrator password at first start and only
//! ever prints it to the application log. This helper greps the container
//! log stream for the marker line and hands the trailing text to the
//! display layer; it never fails the run.

use std::process::{Command, Stdio};

/// Container whose logs carry the generated DFIR-IRIS admin password.
pub const IRIS_CONTAINER: &str = "iriswebapp_app";

/// Marker preceding the password on its log line.
pub const IRIS_PASSWORD_MARKER: &str = "Administrator password:";

const NOT_FOUND: &str = "<not found — check the container logs manually>";

/// Fetch `docker logs <container>` and extract the text after the last
/// occurrence of `marker`. Any failure along the way degrades to a
/// human-readable placeholder.
pub fn retrieve_password(container: &str, marker: &str) -> String {
    let output = match Command::new("docker")
        .args(["logs", container])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
    {
        Ok(o) => o,
        Err(_) => return NOT_FOUND.to_string(),
    };

    // Containerized apps commonly log to stderr; scan both streams.
    let mut logs = String::from_utf8_lossy(&output.stdout).into_owned();
    logs.push('\n');
    logs.push_str(&String::from_utf8_lossy(&output.stderr));

    extract_password(&logs, marker).unwrap_or_else(|| NOT_FOUND.to_string())
}

/// The text after the last `marker` occurrence, trimmed. The last one wins
/// because a recreated container logs a fresh password.
pub fn extract_password(logs: &str, marker: &str) -> Option<String> {
    logs.lines()
        .rev()
        .find_map(|line| line.find(marker).map(|pos| line[pos + marker.len()..].trim()))
        .filter(|p| !p.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_extracted_from_marker_line() {
        let logs = "booting\nWARNING :: post_init :: Administrator password: s3cr3t!pass\nready\n";
        assert_eq!(
            extract_password(logs, IRIS_PASSWORD_MARKER).as_deref(),
            Some("s3cr3t!pass")
        );
    }

    #[test]
    fn last_occurrence_wins() {
        let logs = "Administrator password: old\nrestart\nAdministrator password: new\n";
        assert_eq!(
            extract_password(logs, IRIS_PASSWORD_MARKER).as_deref(),
            Some("new")
        );
    }

    #[test]
    fn no_marker_means_none() {
        assert_eq!(extract_password("nothing here\n", IRIS_PASSWORD_MARKER), None);
    }

    #[test]
    fn marker_with_no_trailing_text_means_none() {
        assert_eq!(
            extract_password("Administrator password:\n", IRIS_PASSWORD_MARKER),
            None
        );
    }
}
