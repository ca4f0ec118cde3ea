use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ComposeAction
// ---------------------------------------------------------------------------

/// One docker compose lifecycle sub-command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComposeAction {
    Build,
    Up,
    Pull,
}

impl ComposeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComposeAction::Build => "build",
            ComposeAction::Up => "up",
            ComposeAction::Pull => "pull",
        }
    }

    /// Argv tail passed to the compose front-end. `up` always runs detached.
    pub fn args(&self) -> &'static [&'static str] {
        match self {
            ComposeAction::Build => &["build"],
            ComposeAction::Up => &["up", "-d"],
            ComposeAction::Pull => &["pull"],
        }
    }
}

// ---------------------------------------------------------------------------
// Recipe
// ---------------------------------------------------------------------------

/// The fixed ordered lifecycle commands for one compose project.
///
/// A recipe runs as a single logical unit: one status key, one retry
/// budget, and a later action never runs after an earlier one failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Logical project name, used in status and message keys.
    pub name: String,
    /// Project directory relative to the deployment root.
    pub dir: String,
    pub actions: Vec<ComposeAction>,
}

impl Recipe {
    /// Status-record key for the whole recipe.
    pub fn task_key(&self) -> String {
        format!("docker_{}", self.name)
    }

    /// Message-table key for one of the recipe's actions.
    pub fn message_key(&self, action: ComposeAction) -> String {
        format!("{} {}", self.name, action.as_str())
    }
}

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// The full ordered deployment plan: install scripts first, then the
/// compose projects. Order is fixed at configuration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub scripts: Vec<String>,
    #[serde(default)]
    pub projects: Vec<Recipe>,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            scripts: vec![
                "wazuh/install.sh".to_string(),
                "wazuh/config.sh".to_string(),
                "utils/docker-install.sh".to_string(),
                "graylog/install.sh".to_string(),
                "graylog/config.sh".to_string(),
                "misp/install.sh".to_string(),
                "Shuffle-docker/install.sh".to_string(),
                "dfir-iris/install.sh".to_string(),
            ],
            projects: vec![
                Recipe {
                    name: "misp".to_string(),
                    dir: "misp-docker".to_string(),
                    actions: vec![ComposeAction::Build, ComposeAction::Up],
                },
                Recipe {
                    name: "shuffle".to_string(),
                    dir: "Shuffle".to_string(),
                    actions: vec![ComposeAction::Up],
                },
                Recipe {
                    name: "dfir-iris".to_string(),
                    dir: "iris-web".to_string(),
                    actions: vec![ComposeAction::Pull, ComposeAction::Up],
                },
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
