//! Lenient `SKILL.md` frontmatter parser.
//!
//! Only `name` and `description` are extracted. This is not a YAML parser:
//! the block is read line by line, `key: value` lines open a new field, and
//! any other non-empty line continues the current value. Nested structures
//! and sequences are ignored.
//!
//! Malformed input never produces an error. Each failure mode maps to a
//! [`ManifestStatus`] and a placeholder description so a reviewer always
//! sees something for every package.

use serde::Serialize;
use std::path::Path;

/// File name of the skill manifest.
pub const MANIFEST_FILE: &str = "SKILL.md";

/// Frontmatter opening and closing delimiter.
const DELIMITER: &str = "---";

/// Description used when the frontmatter declares a name but no description.
pub const NO_DESCRIPTION: &str = "(none)";

/// How the manifest of a package was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManifestStatus {
    /// Frontmatter was found and at least one recognized field was declared.
    Parsed,
    /// The package has no `SKILL.md`.
    MissingManifest,
    /// `SKILL.md` exists but could not be read.
    Unreadable,
    /// `SKILL.md` does not begin with `---`.
    NoFrontmatter,
    /// The opening `---` has no closing counterpart.
    MalformedFrontmatter,
    /// The frontmatter block declares neither `name` nor `description`.
    EmptyFrontmatter,
}

impl ManifestStatus {
    /// Placeholder description shown for a failure mode, `None` for
    /// [`Parsed`](ManifestStatus::Parsed).
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            ManifestStatus::Parsed => None,
            ManifestStatus::MissingManifest => Some("(no SKILL.md)"),
            ManifestStatus::Unreadable => Some("(unreadable)"),
            ManifestStatus::NoFrontmatter => Some("(no frontmatter)"),
            ManifestStatus::MalformedFrontmatter => Some("(malformed frontmatter)"),
            ManifestStatus::EmptyFrontmatter => Some("(empty frontmatter)"),
        }
    }
}

/// Declared identity of a skill package.
///
/// `name` is always populated; it falls back to the directory name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub description: String,
    pub status: ManifestStatus,
}

impl Manifest {
    fn placeholder(dir_name: &str, status: ManifestStatus) -> Self {
        Manifest {
            name: dir_name.to_string(),
            description: status.placeholder().unwrap_or(NO_DESCRIPTION).to_string(),
            status,
        }
    }
}

/// Reads and parses `SKILL.md` from the package directory at `path`.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skill_inventory::scanners::manifest::parse_manifest;
///
/// let manifest = parse_manifest(Path::new("./skills/vetted/pdf-tools"));
/// println!("{}: {}", manifest.name, manifest.description);
/// ```
pub fn parse_manifest(path: &Path) -> Manifest {
    let dir_name = dir_name(path);
    let manifest_path = path.join(MANIFEST_FILE);

    if !manifest_path.exists() {
        return Manifest::placeholder(&dir_name, ManifestStatus::MissingManifest);
    }

    match std::fs::read(&manifest_path) {
        Ok(bytes) => parse_frontmatter(&String::from_utf8_lossy(&bytes), &dir_name),
        Err(e) => {
            tracing::debug!(path = %manifest_path.display(), error = %e, "manifest unreadable");
            Manifest::placeholder(&dir_name, ManifestStatus::Unreadable)
        }
    }
}

/// Parses manifest `content` already in memory.
///
/// `dir_name` supplies the fallback name.
///
/// # Examples
///
/// ```
/// use skill_inventory::scanners::manifest::{parse_frontmatter, ManifestStatus};
///
/// let m = parse_frontmatter("---\ndescription: \"Fills PDF forms\"\n---\n", "pdf-tools");
/// assert_eq!(m.name, "pdf-tools");
/// assert_eq!(m.description, "Fills PDF forms");
/// assert_eq!(m.status, ManifestStatus::Parsed);
/// ```
pub fn parse_frontmatter(content: &str, dir_name: &str) -> Manifest {
    let Some(rest) = content.strip_prefix(DELIMITER) else {
        return Manifest::placeholder(dir_name, ManifestStatus::NoFrontmatter);
    };
    let Some(end) = rest.find(DELIMITER) else {
        return Manifest::placeholder(dir_name, ManifestStatus::MalformedFrontmatter);
    };

    let fields = read_block(rest[..end].trim());
    if fields.is_empty() {
        return Manifest::placeholder(dir_name, ManifestStatus::EmptyFrontmatter);
    }

    let name = fields
        .name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| dir_name.to_string());

    Manifest {
        name,
        description: fields
            .description
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        status: ManifestStatus::Parsed,
    }
}

// ---------------------------------------------------------------------------
// Block state machine
// ---------------------------------------------------------------------------

/// Recognized fields collected from the block.
#[derive(Default)]
struct Fields {
    name: Option<String>,
    description: Option<String>,
}

impl Fields {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }

    /// Stores `value` under `key` when the key is recognized. Later
    /// declarations replace earlier ones.
    fn commit(&mut self, key: &str, value: &str) {
        let value = value.trim().to_string();
        match key {
            "name" => self.name = Some(value),
            "description" => self.description = Some(value),
            _ => {}
        }
    }
}

enum State {
    AwaitingKey,
    Accumulating { key: String, value: String },
}

fn read_block(block: &str) -> Fields {
    let mut fields = Fields::default();
    let mut state = State::AwaitingKey;

    for line in block.split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((next_key, next_value)) = split_key_value(line) {
            if let State::Accumulating { key, value } = &state {
                fields.commit(key, value);
            }
            state = State::Accumulating {
                key: next_key,
                value: next_value,
            };
        } else if let State::Accumulating { value, .. } = &mut state {
            value.push(' ');
            value.push_str(strip_quotes(line));
        }
    }

    if let State::Accumulating { key, value } = &state {
        fields.commit(key, value);
    }
    fields
}

/// Splits a trimmed line on its first colon. List items (`- x`) are never
/// keys. The key is lower-cased; the value is trimmed and unquoted.
fn split_key_value(line: &str) -> Option<(String, String)> {
    if line.starts_with('-') {
        return None;
    }
    let (key, value) = line.split_once(':')?;
    Some((
        key.trim().to_lowercase(),
        strip_quotes(value.trim()).to_string(),
    ))
}

fn strip_quotes(s: &str) -> &str {
    s.trim_matches('"').trim_matches('\'')
}

/// Last path component, or `"unknown"` for paths without one (e.g. `/`).
///
/// Paths such as `.` or `foo/..` are canonicalized first.
pub(crate) fn dir_name(path: &Path) -> String {
    let name = match path.file_name() {
        Some(name) => Some(name.to_os_string()),
        None => std::fs::canonicalize(path)
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_os_string())),
    };
    name.map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
