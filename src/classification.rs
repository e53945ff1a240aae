//! Per-package classification.
//!
//! [`classify`] composes the three detectors in [`scanners`](crate::scanners)
//! into one [`ClassificationRecord`]. It reads the directory at call time
//! and caches nothing, so repeated calls on an unchanged tree return equal
//! records.

use crate::scanners::executable::has_executable_content;
use crate::scanners::manifest::{self, parse_manifest, ManifestStatus};
use crate::scanners::suspicious::{scan_suspicious, Label};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Maximum displayed description length, in characters.
pub const DESCRIPTION_LIMIT: usize = 100;

const ELLIPSIS: &str = "...";

/// Classification of a single skill package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationRecord {
    /// Directory name of the package.
    pub dir: String,
    /// Declared name, or the directory name when undeclared.
    pub name: String,
    /// Description capped at [`DESCRIPTION_LIMIT`] characters.
    pub description: String,
    /// How the manifest was obtained.
    pub manifest_status: ManifestStatus,
    /// The package carries scripts or execution-like config keys.
    pub has_executable: bool,
    /// Labels of suspicious-instruction rules that matched.
    pub suspicious: BTreeSet<Label>,
}

impl ClassificationRecord {
    /// `true` if the package has executable content or suspicious findings.
    pub fn needs_attention(&self) -> bool {
        self.has_executable || !self.suspicious.is_empty()
    }
}

/// Classifies the package directory at `path`.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skill_inventory::classification::classify;
///
/// let record = classify(Path::new("./skills/incoming/pdf-tools"));
/// if record.has_executable {
///     println!("{} ships scripts", record.name);
/// }
/// ```
pub fn classify(path: &Path) -> ClassificationRecord {
    let manifest = parse_manifest(path);

    ClassificationRecord {
        dir: manifest::dir_name(path),
        name: manifest.name,
        description: truncate_description(&manifest.description),
        manifest_status: manifest.status,
        has_executable: has_executable_content(path),
        suspicious: scan_suspicious(path),
    }
}

/// Caps `description` at [`DESCRIPTION_LIMIT`] characters.
///
/// Longer text keeps its first 97 characters followed by `...`.
///
/// # Examples
///
/// ```
/// use skill_inventory::classification::truncate_description;
///
/// assert_eq!(truncate_description("short"), "short");
/// let long = "x".repeat(150);
/// let cut = truncate_description(&long);
/// assert_eq!(cut.chars().count(), 100);
/// assert!(cut.ends_with("..."));
/// ```
pub fn truncate_description(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_LIMIT {
        return description.to_string();
    }
    // Cut on a char boundary; byte slicing would panic on multi-byte text.
    let keep = DESCRIPTION_LIMIT - ELLIPSIS.len();
    let cut = description
        .char_indices()
        .nth(keep)
        .map(|(i, _)| i)
        .unwrap_or(description.len());
    format!("{}{ELLIPSIS}", &description[..cut])
}
