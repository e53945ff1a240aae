//! Pipeline inventory.
//!
//! A skill library holds packages in three review stages: `vetted/`,
//! `incoming/`, and `rejected/`. [`build_inventory`] classifies every
//! package in each stage (plus an optional system-installed directory) and
//! collects the records into an [`Inventory`].
//!
//! Packages within a stage are classified in parallel via [rayon]; records
//! are always ordered by directory name.

use crate::classification::{classify, ClassificationRecord};
use crate::config::Config;
use chrono::{DateTime, Local};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A section of the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    System,
    Vetted,
    Incoming,
    Rejected,
}

impl Stage {
    /// Section heading used in reports.
    pub fn title(self) -> &'static str {
        match self {
            Stage::System => "Installed (System)",
            Stage::Vetted => "Vetted (Ready to Load)",
            Stage::Incoming => "Incoming (Awaiting Review)",
            Stage::Rejected => "Rejected",
        }
    }
}

/// Classified packages of one stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    pub stage: Stage,
    pub path: PathBuf,
    pub skills: Vec<ClassificationRecord>,
}

/// Full inventory of a skill library.
#[derive(Debug, Clone, Serialize)]
pub struct Inventory {
    pub generated_at: DateTime<Local>,
    pub library: PathBuf,
    pub sections: Vec<StageReport>,
}

impl Inventory {
    /// Returns the section for `stage`, if it was scanned.
    pub fn section(&self, stage: Stage) -> Option<&StageReport> {
        self.sections.iter().find(|s| s.stage == stage)
    }

    /// Number of packages in `stage` (zero when not scanned).
    pub fn count(&self, stage: Stage) -> usize {
        self.section(stage).map_or(0, |s| s.skills.len())
    }

    fn vetted(&self) -> impl Iterator<Item = &ClassificationRecord> {
        self.section(Stage::Vetted)
            .into_iter()
            .flat_map(|s| s.skills.iter())
    }

    /// Vetted packages that carry executable content.
    pub fn executable_vetted(&self) -> Vec<&ClassificationRecord> {
        self.vetted().filter(|r| r.has_executable).collect()
    }

    /// Vetted packages with at least one suspicious finding.
    pub fn suspicious_vetted(&self) -> Vec<&ClassificationRecord> {
        self.vetted().filter(|r| !r.suspicious.is_empty()).collect()
    }

    /// `true` if any vetted package needs attention; strict mode fails on this.
    pub fn has_vetted_warnings(&self) -> bool {
        self.vetted().any(ClassificationRecord::needs_attention)
    }
}

/// Classifies the library at `library` using the stage names from `config`.
///
/// The system section is included only when
/// [`Config::system_skills`](crate::config::Config::system_skills) is set
/// and exists. Missing stage directories yield empty sections.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use skill_inventory::{config::Config, inventory};
///
/// let config = Config::load(None).unwrap();
/// let inv = inventory::build_inventory(Path::new("./skill-library"), &config);
/// std::process::exit(if inv.has_vetted_warnings() { 1 } else { 0 });
/// ```
pub fn build_inventory(library: &Path, config: &Config) -> Inventory {
    let mut sections = Vec::new();

    if let Some(system) = config.system_skills.as_deref().filter(|p| p.exists()) {
        sections.push(stage_report(Stage::System, system.to_path_buf()));
    }

    let stages = &config.stages;
    for (stage, dir) in [
        (Stage::Vetted, &stages.vetted),
        (Stage::Incoming, &stages.incoming),
        (Stage::Rejected, &stages.rejected),
    ] {
        sections.push(stage_report(stage, library.join(dir)));
    }

    Inventory {
        generated_at: Local::now(),
        library: library.to_path_buf(),
        sections,
    }
}

fn stage_report(stage: Stage, path: PathBuf) -> StageReport {
    let skills = scan_stage(&path);
    tracing::info!(stage = stage.title(), count = skills.len(), path = %path.display(), "stage scanned");
    StageReport {
        stage,
        path,
        skills,
    }
}

/// Classifies every package directory directly under `dir`.
///
/// Hidden directories (leading `.`) and plain files are skipped. A missing
/// or unreadable `dir` yields an empty list.
pub fn scan_stage(dir: &Path) -> Vec<ClassificationRecord> {
    package_dirs(dir).par_iter().map(|p| classify(p)).collect()
}

/// Immediate non-hidden child directories of `dir`, sorted by name.
pub fn package_dirs(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(path = %dir.display(), error = %e, "stage directory not readable");
            return vec![];
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .filter(|e| !e.file_name().to_string_lossy().starts_with('.'))
        .map(|e| e.path())
        .filter(|p| p.is_dir())
        .collect();

    dirs.sort();
    dirs
}
