use crate::output::{print_json, print_table};
use anyhow::Context;
use socforge_core::status::StatusStore;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let store = StatusStore::load(root).context("failed to load deployment status")?;
    let record = store.record();

    if json {
        let map: serde_json::Map<String, serde_json::Value> = record
            .iter()
            .map(|(key, state)| (key.to_string(), state.as_str().into()))
            .collect();
        print_json(&map)?;
        return Ok(());
    }

    if record.is_empty() {
        println!("No deployment status recorded — nothing has run yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = record
        .iter()
        .map(|(key, state)| vec![key.to_string(), state.as_str().to_string()])
        .collect();
    print_table(&["STEP", "STATE"], rows);
    Ok(())
}
