//! Subcommand handlers for the credits sequence editor.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use credits_seq::{CreditsSequence, read_credits, write_credits};

use crate::summary::{COMMAND_CATALOG, apply_table_style, detail};

/// Decode a credits file and print its commands as an indexed table.
pub fn run_show(file: &Path) -> Result<()> {
    let sequence = read_credits(file).with_context(|| format!("read {}", file.display()))?;
    info!(
        file = %file.display(),
        commands = sequence.len(),
        "decoded credits sequence"
    );

    let mut table = Table::new();
    table.set_header(vec!["#", "Command", "Details"]);
    apply_table_style(&mut table);
    for (index, command) in sequence.iter().enumerate() {
        table.add_row(vec![
            index.to_string(),
            command.name().to_string(),
            detail(command).unwrap_or_default(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Decode a credits file and emit it as JSON.
pub fn run_export(file: &Path, output: Option<&Path>) -> Result<()> {
    let sequence = read_credits(file).with_context(|| format!("read {}", file.display()))?;
    let json = sequence_to_json(&sequence)?;

    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            info!(
                file = %file.display(),
                output = %path.display(),
                commands = sequence.len(),
                "exported credits sequence"
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Encode a JSON command list back to a credits file.
pub fn run_import(input: &Path, output: &Path) -> Result<()> {
    let json =
        fs::read_to_string(input).with_context(|| format!("read {}", input.display()))?;
    let sequence = sequence_from_json(&json)?;
    write_credits(output, &sequence)
        .with_context(|| format!("write {}", output.display()))?;
    info!(
        input = %input.display(),
        output = %output.display(),
        commands = sequence.len(),
        "imported credits sequence"
    );
    Ok(())
}

/// Write a new, empty credits file (terminator record only).
pub fn run_new(file: &Path) -> Result<()> {
    write_credits(file, &CreditsSequence::new())
        .with_context(|| format!("write {}", file.display()))?;
    info!(file = %file.display(), "created empty credits sequence");
    Ok(())
}

/// Print the catalog of all supported command types.
pub fn run_commands() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Op", "Command", "Description"]);
    apply_table_style(&mut table);
    for info in &COMMAND_CATALOG {
        table.add_row(vec![
            info.opcode.to_string(),
            info.name.to_string(),
            info.description.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Serialize a sequence to pretty-printed JSON.
pub fn sequence_to_json(sequence: &CreditsSequence) -> Result<String> {
    serde_json::to_string_pretty(sequence).context("serialize command sequence")
}

/// Parse a sequence from JSON.
pub fn sequence_from_json(json: &str) -> Result<CreditsSequence> {
    serde_json::from_str(json).context("parse command sequence JSON")
}
