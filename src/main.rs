mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use skill_inventory::{classification, config, inventory, output, scanners};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing("warn");
    let cli = Cli::parse();

    match cli.command {
        Commands::Inventory {
            library,
            system_skills,
            format,
            output: output_path,
            strict,
            config: config_path,
        } => {
            if !library.exists() {
                eprintln!("Error: {} not found", library.display());
                std::process::exit(2);
            }

            let mut config = config::Config::load(config_path.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(2);
            });

            if system_skills.is_some() {
                config.system_skills = system_skills;
            }
            if strict {
                config.strict.enabled = true;
            }

            let inventory = inventory::build_inventory(&library, &config);
            let formatted = output::format_inventory(&inventory, &format);

            if let Some(out_path) = output_path {
                std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
                    eprintln!("Error writing output: {e}");
                    std::process::exit(2);
                });
                eprintln!("Output written to {}", out_path.display());
            } else {
                print!("{formatted}");
            }

            let failed = config.strict.enabled && inventory.has_vetted_warnings();
            std::process::exit(if failed { 1 } else { 0 });
        }

        Commands::Classify { path, format } => {
            if !path.is_dir() {
                eprintln!("Error: not a directory: {}", path.display());
                std::process::exit(2);
            }

            let record = classification::classify(&path);
            print!("{}", output::format_record(&record, &format));
        }

        Commands::ListRules => {
            let rules = scanners::all_rules();
            println!("{}", "Suspicious Instruction Rules".bold().underline());
            println!();

            for rule in &rules {
                println!(
                    "  {key} {label:<32} {desc}",
                    key = format!("{:<14}", rule.key).bold(),
                    label = rule.label,
                    desc = rule.description.dimmed(),
                );
            }

            println!();
            println!("  Total: {} rules", rules.len());
        }
    }
}

/// Logs go to stderr so reports on stdout stay clean. `RUST_LOG` overrides
/// `default_level`.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
