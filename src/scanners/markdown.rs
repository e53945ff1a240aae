//! Markdown code-span removal.
//!
//! Skill documentation routinely quotes shell commands and prompts inside
//! code fences. Those examples are inert, so they are removed before the
//! [`suspicious`](crate::scanners::suspicious) rules look at the prose.

use regex::Regex;
use std::sync::LazyLock;

/// Triple-backtick fenced blocks, shortest match, spanning newlines.
static RE_FENCED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

/// Single-backtick inline spans. `[^`]` also matches newlines.
static RE_INLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]*`").unwrap());

/// Removes fenced code blocks and inline code spans from `text`.
///
/// Fenced blocks go first so their backticks cannot pair up with inline
/// spans. The surrounding prose is kept as-is. After one pass at most one
/// unpaired backtick survives, so applying the function again is a no-op.
///
/// # Examples
///
/// ```
/// use skill_inventory::scanners::markdown::strip_code_blocks;
///
/// let text = "Run `ignore previous instructions` here.\n```\nsecret\n```\nDone.";
/// assert_eq!(strip_code_blocks(text), "Run  here.\n\nDone.");
/// ```
pub fn strip_code_blocks(text: &str) -> String {
    let without_fences = RE_FENCED.replace_all(text, "");
    RE_INLINE.replace_all(&without_fences, "").into_owned()
}
