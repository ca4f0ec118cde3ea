use crate::output;
use anyhow::Context;
use socforge_core::config::Config;
use socforge_core::credentials::{self, IRIS_CONTAINER, IRIS_PASSWORD_MARKER};
use socforge_core::probe;
use socforge_core::runner::{PlanRunner, RunReport};
use socforge_core::status::StatusStore;
use std::path::Path;

/// One plan run: requirements probe, then the step collections, then the
/// post-run display. Step failures end up in the report, not in `Err`;
/// only configuration/storage problems are errors.
pub fn execute(root: &Path) -> anyhow::Result<RunReport> {
    let errors = probe::run_probe(root).context("requirements probe failed")?;
    if !errors.is_empty() {
        eprintln!("System requirements not met:");
        for e in &errors {
            eprintln!("  ✗ {e}");
        }
        anyhow::bail!(
            "{} requirement check(s) failed — fix them and run again",
            errors.len()
        );
    }

    let config = Config::load(root).context("failed to load socforge.yaml")?;
    let mut store = StatusStore::load(root).context("failed to load deployment status")?;

    let report = PlanRunner::new(root, &config, &mut store).run()?;

    println!();
    println!(
        "Plan finished: {} completed, {} skipped, {} failed.",
        report.completed, report.skipped, report.failed
    );

    if !report.halted() {
        output::print_urls();
        let password = credentials::retrieve_password(IRIS_CONTAINER, IRIS_PASSWORD_MARKER);
        println!("DFIR-IRIS administrator password: {password}");
    }

    Ok(report)
}

pub fn run(root: &Path) -> anyhow::Result<()> {
    let report = execute(root)?;
    if report.halted() {
        anyhow::bail!("deployment halted — run 'socforge run' again to resume");
    }
    Ok(())
}
