//! Executable-content detection.
//!
//! A package is executable when any file under it is a script by
//! extension, or when a JSON/YAML file declares an execution-like key
//! (`command`, `exec`, `hook`, ...).
//!
//! Config files are matched on key position rather than substrings, so
//! `{"runner": "fast"}` does not count as `run` and a `description` field
//! does not count as `script`.

use crate::scanners::{extension_of, walk_files};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Extensions that are always treated as runnable code.
pub const SCRIPT_EXTENSIONS: &[&str] = &["py", "sh", "js", "ts", "bash", "zsh", "rb", "pl"];

/// Extensions inspected for execution-like keys.
pub const CONFIG_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// An execution token in key position: preceded by line start, whitespace,
/// or a quote, and followed by `:`/`=` or a closing quote.
static RE_EXEC_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?im)(?:^|\s|"|')(?:command|exec|spawn|eval|script|run|hook)(?:\s*[:=]|"|')"#,
    )
    .unwrap()
});

/// Returns `true` if the package at `path` carries executable logic.
///
/// The walk stops at the first qualifying file. Unreadable config files are
/// skipped and count neither way.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skill_inventory::scanners::executable::has_executable_content;
///
/// if has_executable_content(Path::new("./skills/incoming/deploy-helper")) {
///     println!("needs a closer look");
/// }
/// ```
pub fn has_executable_content(path: &Path) -> bool {
    walk_files(path).any(|file| {
        let Some(ext) = extension_of(&file) else {
            return false;
        };
        if SCRIPT_EXTENSIONS.contains(&ext.as_str()) {
            return true;
        }
        if CONFIG_EXTENSIONS.contains(&ext.as_str()) {
            return match std::fs::read(&file) {
                Ok(bytes) => config_declares_execution(&String::from_utf8_lossy(&bytes)),
                Err(e) => {
                    tracing::debug!(path = %file.display(), error = %e, "skipping unreadable config");
                    false
                }
            };
        }
        false
    })
}

/// Returns `true` if config `text` contains an execution-like key.
///
/// # Examples
///
/// ```
/// use skill_inventory::scanners::executable::config_declares_execution;
///
/// assert!(config_declares_execution(r#"{"command": "rm -rf /"}"#));
/// assert!(!config_declares_execution(r#"{"runner": "fast"}"#));
/// ```
pub fn config_declares_execution(text: &str) -> bool {
    RE_EXEC_KEY.is_match(text)
}
