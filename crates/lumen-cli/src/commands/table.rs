//! Transfer table command
//!
//! Prints the output level for every input level of a mapping.

use crate::TableArgs;
use anyhow::{bail, Result};
use lumen_ops::TransferTable;
use std::io::Write;
use tracing::{debug, info};

pub fn run(args: TableArgs) -> Result<()> {
    let mapping = super::mapping_from_args(&args.mapping)?;
    if mapping.needs_statistics() {
        debug!(max = args.max, "Assuming image maximum");
    }
    let table = mapping.transfer_table(args.max);

    info!(mode = mapping.name(), identity = table.is_identity(), "Resolved transfer table");

    let text = render(&table, &args.format)?;
    std::io::stdout().lock().write_all(text.as_bytes())?;
    Ok(())
}

/// Render a table as `input output` lines or CSV
fn render(table: &TransferTable, format: &str) -> Result<String> {
    let (header, sep) = match format.to_lowercase().as_str() {
        "plain" | "txt" => ("", ' '),
        "csv" => ("input,output\n", ','),
        other => bail!("Unsupported table format: {}", other),
    };

    let mut out = String::from(header);
    for (x, y) in table.as_array().iter().enumerate() {
        out.push_str(&format!("{x}{sep}{y}\n"));
    }
    Ok(out)
}
