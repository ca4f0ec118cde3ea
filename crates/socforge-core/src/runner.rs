//! The plan runner: walks the ordered step collections, consults the
//! status store to skip finished work, delegates pending steps to the
//! retry controller, and halts the remaining plan on the first
//! unrecoverable failure.

use crate::config::Config;
use crate::error::Result;
use crate::executor::{self, ComposeTool, Outcome};
use crate::messages::MessageSet;
use crate::paths;
use crate::plan::ComposeAction;
use crate::retry::{with_retry, RetryPolicy};
use crate::status::StatusStore;
use std::path::Path;

// ---------------------------------------------------------------------------
// RunReport
// ---------------------------------------------------------------------------

/// Outcome summary of one plan run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub completed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunReport {
    /// True when the run stopped before the end of the plan. At most one
    /// step fails per run; everything after it is never attempted.
    pub fn halted(&self) -> bool {
        self.failed > 0
    }
}

// ---------------------------------------------------------------------------
// PlanRunner
// ---------------------------------------------------------------------------

pub struct PlanRunner<'a> {
    root: &'a Path,
    config: &'a Config,
    store: &'a mut StatusStore,
}

impl<'a> PlanRunner<'a> {
    pub fn new(root: &'a Path, config: &'a Config, store: &'a mut StatusStore) -> Self {
        Self {
            root,
            config,
            store,
        }
    }

    /// Run the whole plan: scripts first, then compose projects. A failure
    /// in either collection halts everything after it, since later steps
    /// assume the earlier ones (the container runtime above all) are in
    /// place.
    pub fn run(&mut self) -> Result<RunReport> {
        let mut report = RunReport::default();
        if self.run_scripts(&mut report)? {
            self.run_projects(&mut report)?;
        }
        Ok(report)
    }

    fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.config.retry.max_attempts,
            delay: self.config.retry.delay(),
        }
    }

    // -----------------------------------------------------------------------
    // Script collection
    // -----------------------------------------------------------------------

    fn run_scripts(&mut self, report: &mut RunReport) -> Result<bool> {
        let config = self.config;
        let root = self.root;
        for script in &config.plan.scripts {
            if self.store.is_completed(script) {
                println!("'{script}' already done — skipping.");
                report.skipped += 1;
                continue;
            }

            let Some(messages) = config.messages.get(script) else {
                println!("no messages registered for '{script}' — step skipped.");
                report.skipped += 1;
                continue;
            };

            if !paths::script_path(root, script).is_file() {
                println!("{}", messages.failure);
                eprintln!("  missing script: {script}");
                self.store.mark_failed(script)?;
                report.failed += 1;
                return Ok(false);
            }

            let ok = with_retry(self.policy(), || {
                println!("{}", messages.start);
                let outcome = executor::run_script(root, script);
                report_outcome(messages, &outcome);
                outcome
            });

            if ok {
                self.store.mark_completed(script)?;
                report.completed += 1;
            } else {
                self.store.mark_failed(script)?;
                report.failed += 1;
                return Ok(false);
            }
        }
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Project collection
    // -----------------------------------------------------------------------

    fn run_projects(&mut self, report: &mut RunReport) -> Result<bool> {
        let config = self.config;
        let root = self.root;
        // The front-end is resolved once, lazily: projects that are already
        // done or have no messages never require a compose runtime at all.
        let mut tool: Option<ComposeTool> = None;

        for recipe in &config.plan.projects {
            let key = recipe.task_key();

            if self.store.is_completed(&key) {
                println!("'{}' already done — skipping.", recipe.name);
                report.skipped += 1;
                continue;
            }

            // Sub-commands without a registered message set are dropped with
            // a warning; a project with none left is a configuration gap.
            let mut steps: Vec<(ComposeAction, &MessageSet)> = Vec::new();
            for action in &recipe.actions {
                let msg_key = recipe.message_key(*action);
                match config.messages.get(&msg_key) {
                    Some(m) => steps.push((*action, m)),
                    None => {
                        println!("no messages registered for '{msg_key}' — step skipped.");
                    }
                }
            }
            if steps.is_empty() {
                report.skipped += 1;
                continue;
            }

            let dir = paths::project_dir(root, &recipe.dir);
            if !dir.is_dir() {
                eprintln!("  missing project directory: {}", recipe.dir);
                self.store.mark_failed(&key)?;
                report.failed += 1;
                return Ok(false);
            }

            let tool = match tool {
                Some(t) => t,
                None => {
                    let t = ComposeTool::detect()?;
                    tool = Some(t);
                    t
                }
            };

            // The whole recipe is one retried unit: an attempt replays it
            // from the first sub-command, and stops at the first failure.
            let ok = with_retry(self.policy(), || {
                for (action, messages) in &steps {
                    println!("{}", messages.start);
                    let outcome = executor::run_compose(tool, &dir, *action);
                    report_outcome(messages, &outcome);
                    if !outcome.is_success() {
                        return outcome;
                    }
                }
                Outcome::Success
            });

            if ok {
                self.store.mark_completed(&key)?;
                report.completed += 1;
            } else {
                self.store.mark_failed(&key)?;
                report.failed += 1;
                eprintln!(
                    "  retries exhausted for '{}' — check network connectivity and try again.",
                    recipe.name
                );
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn report_outcome(messages: &MessageSet, outcome: &Outcome) {
    match outcome {
        Outcome::Success => println!("{}", messages.success),
        Outcome::Failure(diagnostic) => {
            println!("{}", messages.failure);
            for line in diagnostic.lines() {
                eprintln!("    {line}");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
