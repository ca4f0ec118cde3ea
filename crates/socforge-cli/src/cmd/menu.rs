use crate::cmd::deploy;
use crate::output;
use std::io::{BufRead, Write};
use std::path::Path;

/// The interactive entry point: loop on a two-choice menu until the
/// operator quits. A failed run is reported inline and returns to the
/// menu; choosing to run again resumes from the status file.
pub fn run(root: &Path) -> anyhow::Result<()> {
    output::print_banner();

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("  [1] Run the deployment plan");
        println!("  [2] Quit");
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // EOF on stdin behaves like quit.
            return Ok(());
        };

        match line?.trim() {
            "1" => match deploy::execute(root) {
                Ok(report) if report.halted() => {
                    eprintln!("Deployment halted — choose [1] again to resume.");
                }
                Ok(_) => {}
                Err(e) => eprintln!("error: {e:#}"),
            },
            "2" | "q" | "quit" => return Ok(()),
            other => println!("Unrecognized choice '{other}' — enter 1 or 2."),
        }
    }
}
