//! # skill-inventory
//!
//! Inventory and triage for AI agent skills.
//!
//! A skill is a directory with a `SKILL.md` manifest and supporting files.
//! `skill-inventory` classifies each skill in a review pipeline, separating
//! plain declarative skills from ones that ship executable logic or carry
//! instructions aimed at manipulating an automated reader.
//!
//! Classification is static and lexical: nothing is executed, and the
//! detectors are heuristics meant to route packages to a human reviewer.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use skill_inventory::classification::classify;
//!
//! let record = classify(Path::new("./skill-library/incoming/pdf-tools"));
//! println!("{} executable={}", record.name, record.has_executable);
//! for label in &record.suspicious {
//!     println!("  flagged: {label}");
//! }
//! ```
//!
//! ## Architecture
//!
//! 1. **[`scanners`]** — the detectors: [`scanners::manifest`],
//!    [`scanners::executable`], [`scanners::suspicious`], plus
//!    [`scanners::markdown`] code-span stripping.
//! 2. **[`classification`]** — combine the detectors into one
//!    [`classification::ClassificationRecord`] per package.
//! 3. **[`inventory`]** — classify every package of every pipeline stage.
//! 4. **[`config`]** — TOML configuration for stage names and strict mode.
//! 5. **[`output`]** — render records and inventories as text or JSON.

pub mod classification;
pub mod config;
pub mod inventory;
pub mod output;
pub mod scanners;
