//! Human-readable sectioned text formatter.
//!
//! Sections rendered (in order):
//! 1. **Header** — title and timestamp.
//! 2. **Stages** — one section per scanned stage, one entry per package.
//! 3. **Pipeline** — per-stage counts.
//! 4. **Warnings** — vetted packages with executable or suspicious content.

use crate::classification::ClassificationRecord;
use crate::inventory::{Inventory, Stage};
use colored::Colorize;

/// Formats an [`Inventory`] as sectioned, ANSI-colored text.
pub fn format_inventory(inventory: &Inventory) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}\n",
        format!(
            "=== Skill Inventory — {} ===",
            inventory.generated_at.format("%Y-%m-%d %H:%M")
        )
        .bold()
    ));

    for section in &inventory.sections {
        out.push_str(&format!(
            "\n{}\n",
            format!("## {} ({})", section.stage.title(), section.skills.len()).bold()
        ));
        if section.skills.is_empty() {
            out.push_str(&format!("  {}\n", "(none)".dimmed()));
            continue;
        }
        for record in &section.skills {
            push_record(&mut out, record);
        }
    }

    out.push_str(&format!(
        "\n{}\n",
        format!(
            "## Pipeline: {} vetted, {} incoming, {} rejected",
            inventory.count(Stage::Vetted),
            inventory.count(Stage::Incoming),
            inventory.count(Stage::Rejected),
        )
        .bold()
    ));

    let executable = inventory.executable_vetted();
    if !executable.is_empty() {
        out.push_str(&format!(
            "\n{}\n",
            format!(
                "⚠ {} vetted skill(s) contain executable content:",
                executable.len()
            )
            .yellow()
            .bold()
        ));
        for record in executable {
            out.push_str(&format!("  - {}\n", record.name));
        }
    }

    let suspicious = inventory.suspicious_vetted();
    if !suspicious.is_empty() {
        out.push_str(&format!(
            "\n{}\n",
            format!(
                "⚠ {} vetted skill(s) contain suspicious instruction patterns:",
                suspicious.len()
            )
            .red()
            .bold()
        ));
        for record in suspicious {
            out.push_str(&format!("  - {}: {}\n", record.name, labels(record)));
        }
    }

    out
}

/// Formats a single [`ClassificationRecord`] as an indented entry.
pub fn format_record(record: &ClassificationRecord) -> String {
    let mut out = String::new();
    push_record(&mut out, record);
    out
}

fn push_record(out: &mut String, record: &ClassificationRecord) {
    let flag = if record.has_executable {
        format!(" {}", "[EXECUTABLE]".yellow().bold())
    } else {
        String::new()
    };
    out.push_str(&format!("  {}{flag}\n", record.name.bold()));
    out.push_str(&format!("    {}\n", record.description));
    if record.dir != record.name {
        out.push_str(&format!("    {}\n", format!("dir: {}", record.dir).dimmed()));
    }
    if !record.suspicious.is_empty() {
        out.push_str(&format!(
            "    {} {}\n",
            "suspicious:".red().bold(),
            labels(record)
        ));
    }
}

fn labels(record: &ClassificationRecord) -> String {
    record
        .suspicious
        .iter()
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}
