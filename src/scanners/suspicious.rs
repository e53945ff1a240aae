//! Suspicious-instruction scanner.
//!
//! Looks for prose that tries to manipulate an automated reader: instruction
//! overrides, claims of elevated modes, exfiltration requests, smuggled
//! base64 payloads, and zero-width characters that hide text from humans.
//!
//! Only `SKILL.md` and `AGENT.md` are inspected. Code spans are stripped
//! first (see [`strip_code_blocks`]), so documented examples are exempt.
//!
//! This is a heuristic triage aid. It flags packages for human review and
//! accepts both false positives and false negatives.
//!
//! # Rules
//!
//! | Key | Label |
//! |-----|-------|
//! | `override` | Override instructions |
//! | `privilege` | Privilege escalation |
//! | `exfiltration` | Data exfiltration |
//! | `base64` | Base64-encoded content |
//! | `unicode` | Obfuscated Unicode characters |

use crate::scanners::manifest::MANIFEST_FILE;
use crate::scanners::markdown::strip_code_blocks;
use crate::scanners::RuleInfo;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

/// Secondary free-text file scanned alongside the manifest.
pub const AGENT_FILE: &str = "AGENT.md";

/// A finding label, e.g. `"Override instructions"`.
pub type Label = &'static str;

/// How a rule decides whether text matches.
enum Matcher {
    /// Any regex match.
    Pattern(&'static LazyLock<Regex>),
    /// A regex match that is not enclosed by a backtick on both sides.
    Unfenced(&'static LazyLock<Regex>),
    /// Presence of any of the listed characters.
    AnyChar(&'static [char]),
}

impl Matcher {
    fn matches(&self, text: &str) -> bool {
        match self {
            Matcher::Pattern(re) => re.is_match(text),
            Matcher::Unfenced(re) => re.find_iter(text).any(|m| {
                !(text[..m.start()].ends_with('`') && text[m.end()..].starts_with('`'))
            }),
            Matcher::AnyChar(chars) => text.contains(*chars),
        }
    }
}

/// A labeled heuristic.
struct PatternRule {
    key: &'static str,
    label: Label,
    matcher: Matcher,
    description: &'static str,
}

static RE_OVERRIDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:ignore\s+(?:previous|all\s+prior|your|the)\s+instructions?|ignore\s+all\s+prior|disregard\s+(?:above|previous)|override\s+(?:system\s+)?prompt|forget\s+(?:your\s+)?instructions?|you\s+are\s+now\s+(?:a|an|the)|act\s+as\s+if)",
    )
    .unwrap()
});

static RE_PRIVILEGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:admin\s+mode|developer\s+mode|unrestricted\s+mode|no\s+restrictions?|bypass\s+safety|disable\s+safety|turn\s+off\s+filters?)",
    )
    .unwrap()
});

// The verb-to-destination gap is lazy and may cross newlines.
static RE_EXFILTRATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)(?:send|post|upload|exfiltrate|transmit\s+data).*?(?:to|at)\s*(?:https?://\S+|[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,})",
    )
    .unwrap()
});

static RE_BASE64: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9+/]{50,}={0,2}").unwrap());

/// Zero-width space, zero-width non-joiner, zero-width joiner, BOM.
const OBFUSCATION_CHARS: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

static RULES: &[PatternRule] = &[
    PatternRule {
        key: "override",
        label: "Override instructions",
        matcher: Matcher::Pattern(&RE_OVERRIDE),
        description: "Asks the reader to ignore prior instructions, override the system prompt, or take on a new role",
    },
    PatternRule {
        key: "privilege",
        label: "Privilege escalation",
        matcher: Matcher::Pattern(&RE_PRIVILEGE),
        description: "Claims an admin/developer/unrestricted mode or disables safety behavior",
    },
    PatternRule {
        key: "exfiltration",
        label: "Data exfiltration",
        matcher: Matcher::Pattern(&RE_EXFILTRATION),
        description: "Send/post/upload/exfiltrate verb followed by a URL or email destination",
    },
    PatternRule {
        key: "base64",
        label: "Base64-encoded content",
        matcher: Matcher::Unfenced(&RE_BASE64),
        description: "Run of 50+ base64 characters outside backticks, a possible encoded payload",
    },
    PatternRule {
        key: "unicode",
        label: "Obfuscated Unicode characters",
        matcher: Matcher::AnyChar(OBFUSCATION_CHARS),
        description: "Zero-width or byte-order-mark characters that hide text from human reviewers",
    },
];

/// Scans `SKILL.md` and `AGENT.md` of the package at `path`.
///
/// Missing or unreadable files are skipped. Labels are aggregated across
/// both files; each appears at most once.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skill_inventory::scanners::suspicious::scan_suspicious;
///
/// for label in scan_suspicious(Path::new("./skills/incoming/helper")) {
///     println!("flagged: {label}");
/// }
/// ```
pub fn scan_suspicious(path: &Path) -> BTreeSet<Label> {
    let mut labels = BTreeSet::new();

    for file in [MANIFEST_FILE, AGENT_FILE] {
        let file_path = path.join(file);
        if !file_path.exists() {
            continue;
        }
        let content = match std::fs::read(&file_path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                tracing::debug!(path = %file_path.display(), error = %e, "skipping unreadable file");
                continue;
            }
        };
        labels.extend(scan_text(&content));
    }

    labels
}

/// Applies every rule to `text` after stripping code spans.
///
/// # Examples
///
/// ```
/// use skill_inventory::scanners::suspicious::scan_text;
///
/// assert!(scan_text("Ignore previous instructions.").contains("Override instructions"));
/// assert!(scan_text("`ignore previous instructions`").is_empty());
/// ```
pub fn scan_text(text: &str) -> BTreeSet<Label> {
    let cleaned = strip_code_blocks(text);
    RULES
        .iter()
        .filter(|rule| rule.matcher.matches(&cleaned))
        .map(|rule| rule.label)
        .collect()
}

/// Returns [`RuleInfo`] for every rule, in evaluation order.
pub fn rules() -> Vec<RuleInfo> {
    RULES
        .iter()
        .map(|r| RuleInfo {
            key: r.key,
            label: r.label,
            description: r.description,
        })
        .collect()
}
