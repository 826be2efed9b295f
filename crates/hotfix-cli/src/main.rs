use anyhow::Result;
use clap::Parser;
use hotfix_core::types::FixStatus;
use hotfix_core::{apply_fix, run_preflight_checks, scripts, Script};
use log::debug;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(author, version, about = "Small idempotent maintenance patches for the game app checkout", long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Add the debug route to the checkout in the current directory
    hotfix debug-route

    # See what the whole catalog would change, without writing anything
    hotfix all --dry-run

    # Patch a checkout somewhere else
    hotfix health-route --root ~/src/game-app

SCRIPTS:
    Run `hotfix list` for the catalog. Every script except log-run is
    idempotent: rerunning it reports [SKIP] and rewrites nothing."#)]
struct Args {
    /// Script name to run, or "all" for the whole catalog, or "list"
    #[arg(value_name = "SCRIPT")]
    script: String,

    /// Root of the checkout to patch
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Report what would change without writing anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("root: {:?}, dry_run: {}", args.root, args.dry_run);

    let selected: Vec<Script> = match args.script.as_str() {
        "list" => {
            println!("Available scripts:");
            for script in scripts::catalog() {
                println!("  {:<24} {}", script.name, script.summary);
            }
            return Ok(());
        }
        "all" => scripts::catalog(),
        name => match scripts::find(name) {
            Some(script) => vec![script],
            None => {
                eprintln!("Error: Unknown script '{}'.", name);
                eprintln!("Run `hotfix list` to see the catalog.");
                process::exit(1);
            }
        },
    };

    let mut total = 0;
    let mut success_count = 0;
    let mut skip_count = 0;
    let mut fail_count = 0;

    for script in &selected {
        println!("\n--- Script: {} ---", script.name);
        let fixes = (script.fixes)();
        total += fixes.len();

        match run_preflight_checks(&args.root, &fixes) {
            Ok(()) => println!("--- Preflight checks passed. Proceeding. ---"),
            Err(errors) => {
                println!("--- Preflight checks failed ---");
                for err in errors {
                    println!("{}", err);
                }
                println!("Skipping '{}'. No files were modified.", script.name);
                fail_count += fixes.len();
                continue;
            }
        }

        for fix in &fixes {
            match apply_fix(&args.root, fix, args.dry_run) {
                Ok(report) => {
                    println!("{}", report.message);
                    match report.status {
                        FixStatus::Applied | FixStatus::DryRun => success_count += 1,
                        FixStatus::Skipped => skip_count += 1,
                    }
                }
                Err(e) => {
                    println!("    [ERROR] {:#}", e);
                    fail_count += 1;
                }
            }
        }
    }

    println!("\n--- Summary ---");
    println!("Total fixes:          {}", total);
    println!("Successfully applied: {}", success_count);
    println!("Already applied:      {}", skip_count);
    println!("Failed to apply:      {}", fail_count);

    if fail_count > 0 {
        process::exit(1);
    }

    Ok(())
}
