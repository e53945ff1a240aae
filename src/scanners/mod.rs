//! Classification detectors.
//!
//! Each detector looks at one package directory and answers one question:
//!
//! - [`manifest`] — what does the package say it is?
//! - [`executable`] — does it carry runnable logic?
//! - [`suspicious`] — does its prose try to steer an automated reader?
//!
//! [`markdown`] supplies the code-span stripping that [`suspicious`] runs
//! before matching. Use [`all_rules`] to list every suspicious-instruction
//! rule.
//!
//! None of the detectors fail: missing or unreadable files are skipped or
//! reported through placeholder values.

pub mod executable;
pub mod manifest;
pub mod markdown;
pub mod suspicious;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively yields every regular file under `path`.
///
/// Directory entries that cannot be read are skipped. Symbolic links to
/// files are yielded; links to directories are not descended into.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skill_inventory::scanners::walk_files;
///
/// let count = walk_files(Path::new("./my-skill")).count();
/// ```
pub fn walk_files(path: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::debug!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file() || (e.path_is_symlink() && e.path().is_file()))
        .map(|e| e.into_path())
}

/// Lower-cased extension of `path`, without the dot.
pub(crate) fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// Metadata for a single suspicious-instruction rule.
///
/// Returned by [`all_rules`] and used by the `list-rules` CLI command.
pub struct RuleInfo {
    /// Stable rule key (e.g., `"override"`).
    pub key: &'static str,
    /// Finding label reported when the rule matches.
    pub label: &'static str,
    /// What the rule looks for.
    pub description: &'static str,
}

/// Lists every rule of the suspicious-instruction scanner, in evaluation order.
pub fn all_rules() -> Vec<RuleInfo> {
    suspicious::rules()
}
