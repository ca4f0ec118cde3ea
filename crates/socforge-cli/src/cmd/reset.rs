use socforge_core::paths;
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let path = paths::status_path(root);
    if !path.exists() {
        println!("No status file to remove.");
        return Ok(());
    }
    std::fs::remove_file(&path)?;
    println!(
        "Removed {} — the next run starts from scratch.",
        paths::STATUS_FILE
    );
    Ok(())
}
