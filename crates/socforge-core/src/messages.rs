use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// MessageSet
// ---------------------------------------------------------------------------

/// The operator-facing strings printed around one step. These are the only
/// output a step produces; the wrapped tool's own stdout/stderr stays
/// suppressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSet {
    pub start: String,
    pub success: String,
    pub failure: String,
}

impl MessageSet {
    fn new(start: &str, success: &str, failure: &str) -> Self {
        Self {
            start: start.to_string(),
            success: success.to_string(),
            failure: failure.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// MessageTable
// ---------------------------------------------------------------------------

/// Step key → message set. A step whose key is absent here is skipped with
/// a warning, never run with made-up messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTable(BTreeMap<String, MessageSet>);

impl MessageTable {
    pub fn get(&self, key: &str) -> Option<&MessageSet> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, messages: MessageSet) {
        self.0.insert(key.into(), messages);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages for the built-in plan. Script steps are keyed by their
    /// relative path, compose steps by `"<project> <action>"`.
    pub fn defaults() -> Self {
        let mut t = BTreeMap::new();

        t.insert(
            "wazuh/install.sh".to_string(),
            MessageSet::new(
                "Installing Wazuh...",
                "✓ Wazuh installation completed.",
                "✗ Wazuh installation failed.",
            ),
        );
        t.insert(
            "wazuh/config.sh".to_string(),
            MessageSet::new(
                "Configuring Wazuh...",
                "✓ Wazuh configuration completed.",
                "✗ Wazuh configuration failed.",
            ),
        );
        t.insert(
            "utils/docker-install.sh".to_string(),
            MessageSet::new(
                "Installing Docker...",
                "✓ Docker installation completed.",
                "✗ Docker installation failed.",
            ),
        );
        t.insert(
            "graylog/install.sh".to_string(),
            MessageSet::new(
                "Installing Graylog...",
                "✓ Graylog installation completed.",
                "✗ Graylog installation failed.",
            ),
        );
        t.insert(
            "graylog/config.sh".to_string(),
            MessageSet::new(
                "Configuring Graylog...",
                "✓ Graylog configuration completed.",
                "✗ Graylog configuration failed.",
            ),
        );
        t.insert(
            "misp/install.sh".to_string(),
            MessageSet::new(
                "Cloning and configuring MISP...",
                "✓ MISP cloning and configuration completed.",
                "✗ MISP cloning and configuration failed.",
            ),
        );
        t.insert(
            "Shuffle-docker/install.sh".to_string(),
            MessageSet::new(
                "Cloning and configuring Shuffle...",
                "✓ Shuffle cloning and configuration completed.",
                "✗ Shuffle cloning and configuration failed.",
            ),
        );
        t.insert(
            "dfir-iris/install.sh".to_string(),
            MessageSet::new(
                "Cloning and configuring iris-web...",
                "✓ iris-web cloning and configuration completed.",
                "✗ iris-web cloning and configuration failed.",
            ),
        );

        t.insert(
            "misp build".to_string(),
            MessageSet::new(
                "Building Docker images for MISP...",
                "✓ Docker image build for MISP completed.",
                "✗ Docker image build for MISP failed.",
            ),
        );
        t.insert(
            "misp up".to_string(),
            MessageSet::new(
                "Starting Docker containers for MISP...",
                "✓ Docker containers for MISP started.",
                "✗ Starting Docker containers for MISP failed.",
            ),
        );
        t.insert(
            "shuffle up".to_string(),
            MessageSet::new(
                "Starting Docker containers for Shuffle...",
                "✓ Docker containers for Shuffle started.",
                "✗ Starting Docker containers for Shuffle failed.",
            ),
        );
        t.insert(
            "dfir-iris pull".to_string(),
            MessageSet::new(
                "Pulling Docker images for DFIR-IRIS...",
                "✓ Docker images for DFIR-IRIS pulled.",
                "✗ Pulling Docker images for DFIR-IRIS failed.",
            ),
        );
        t.insert(
            "dfir-iris up".to_string(),
            MessageSet::new(
                "Starting Docker containers for DFIR-IRIS...",
                "✓ Docker containers for DFIR-IRIS started.",
                "✗ Starting Docker containers for DFIR-IRIS failed.",
            ),
        );

        Self(t)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
