use anyhow::Result;
use clap::Parser;

mod config;
mod error;
mod manifest;
mod marker;
mod ui;
mod version;
mod workflow;

use version::BumpLevel;
use workflow::{run_bump_workflow, BumpWorkflowArgs};

#[derive(clap::Parser)]
#[command(
    name = "bump-version",
    about = "Bump the project version and keep the package marker in sync"
)]
struct Args {
    #[arg(help = "Bump level to apply: patch, minor or major (default: patch)")]
    level: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Override the configured manifest path")]
    manifest: Option<String>,

    #[arg(long, help = "Override the configured version marker path")]
    marker: Option<String>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("bump-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Resolve the requested level before any file is opened, so a bad token
    // can never leave the documents half-updated
    let level = match BumpLevel::resolve(args.level.as_deref()) {
        Ok(level) => level,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Load configuration
    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    // CLI overrides take precedence over the configured paths
    if let Some(manifest) = args.manifest {
        config.manifest = manifest;
    }
    if let Some(marker) = args.marker {
        config.marker = marker;
    }

    let workflow_args = BumpWorkflowArgs {
        level,
        dry_run: args.dry_run,
    };

    let outcome = match run_bump_workflow(&workflow_args, &config) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if !outcome.changed {
        println!(
            "Version unchanged ({}) - nothing to do.",
            outcome.old_version
        );
        return Ok(());
    }

    if args.dry_run {
        ui::display_status(&format!("Dry run ({} bump):", level));
        ui::display_proposed_bump(&outcome.old_version, &outcome.new_version);
        ui::display_success(&format!("  Step 1: would rewrite {}", config.manifest));
        ui::display_success(&format!("  Step 2: would update {}", config.marker));
        return Ok(());
    }

    println!(
        "Bumped version: {} -> {}",
        outcome.old_version, outcome.new_version
    );
    Ok(())
}
