use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    // Calculate column widths
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    // Print header
    let header_row: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_row.join("  "));

    // Print separator
    let sep: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep.join("  "));

    // Print rows
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let w = widths.get(i).copied().unwrap_or(0);
                format!("{:width$}", cell, width = w)
            })
            .collect();
        println!("{}", cells.join("  "));
    }
}

pub fn print_banner() {
    println!("=============================================================");
    println!("         socforge — single-host SOC stack installer");
    println!("=============================================================");
    println!();
    println!("Installs and wires up, in order:");
    println!("  1. Wazuh");
    println!("  2. Docker");
    println!("  3. Graylog");
    println!("  4. MISP");
    println!("  5. Shuffle");
    println!("  6. DFIR-IRIS");
    println!();
    println!("Progress is recorded in status.json; an interrupted run");
    println!("resumes from the last completed step.");
    println!("=============================================================");
}

/// Web-interface access table, shown after a successful full run.
pub fn print_urls() {
    println!();
    println!("=============================================================");
    println!("                   Web interface access");
    println!("=============================================================");
    let rows = vec![
        vec!["Wazuh".to_string(), "https://<ip-address>:5601".to_string()],
        vec!["Graylog".to_string(), "http://<ip-address>:9000".to_string()],
        vec!["MISP".to_string(), "https://<ip-address>:4433".to_string()],
        vec!["Shuffle".to_string(), "https://<ip-address>:3443".to_string()],
        vec!["DFIR-IRIS".to_string(), "https://<ip-address>".to_string()],
    ];
    print_table(&["TOOL", "URL"], rows);
    println!();
    println!("Replace <ip-address> with the address configured on this host.");
}
