//! Report rendering.
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Pretty`](OutputFormat::Pretty) | [`pretty`] | Terminal / human review |
//! | [`Json`](OutputFormat::Json)     | [`json`]   | Automation / scripting  |
//!
//! [`format_inventory`] renders a whole library; [`format_record`] renders a
//! single classified package.

pub mod json;
pub mod pretty;

use crate::classification::ClassificationRecord;
use crate::inventory::Inventory;

/// Supported output formats.
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable sectioned text.
    Pretty,
    /// Machine-readable JSON.
    Json,
}

/// Renders an [`Inventory`] in the requested [`OutputFormat`].
///
/// # Examples
///
/// ```rust,no_run
/// use skill_inventory::output::{format_inventory, OutputFormat};
/// # use skill_inventory::inventory::Inventory;
/// # fn example(inventory: &Inventory) {
/// let json = format_inventory(inventory, &OutputFormat::Json);
/// println!("{json}");
/// # }
/// ```
pub fn format_inventory(inventory: &Inventory, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => pretty::format_inventory(inventory),
        OutputFormat::Json => json::format(inventory),
    }
}

/// Renders one [`ClassificationRecord`] in the requested [`OutputFormat`].
pub fn format_record(record: &ClassificationRecord, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => pretty::format_record(record),
        OutputFormat::Json => json::format(record),
    }
}
