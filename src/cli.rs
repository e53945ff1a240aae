use clap::{Parser, Subcommand};
use skill_inventory::output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skill-inventory",
    version,
    about = "Inventory and triage for AI agent skill libraries"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report every skill across the vetted, incoming, and rejected stages
    Inventory {
        /// Root of the skill library (contains vetted/, incoming/, rejected/)
        library: PathBuf,

        /// Directory of system-installed skills to report as its own section
        #[arg(long)]
        system_skills: Option<PathBuf>,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Exit with status 1 when a vetted skill has executable or suspicious content
        #[arg(long)]
        strict: bool,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Classify a single skill directory
    Classify {
        /// Path to the skill directory
        path: PathBuf,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,
    },

    /// List the suspicious-instruction rules
    ListRules,
}
