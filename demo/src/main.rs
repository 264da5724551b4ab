//! vouch — command-line demo
//!
//! Loads a TOML rule set, compiles it into a verifier chain, and checks a
//! value given on the command line. Every violated rule is reported, in the
//! order the rules are declared in the file.
//!
//! Usage:
//!   cargo run -p demo -- check --rules demo/rules/username.toml alice
//!   cargo run -p demo -- check --rules demo/rules/port.toml 8081 --json
//!   cargo run -p demo -- rules --rules demo/rules/ratio.toml

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vouch_config::RuleSet;
use vouch_contracts::{RunReport, VouchResult};

// ── CLI definition ────────────────────────────────────────────────────────────

/// vouch — check values against declarative rule sets.
#[derive(Parser)]
#[command(
    name = "vouch",
    about = "Check values against TOML rule sets",
    long_about = "Compiles a TOML rule set into a verifier chain and checks values against it.\n\
                  Every violated rule is reported, in declaration order."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check one value against a rule set. Exits 1 if the value is rejected.
    Check {
        /// Path to the TOML rule set.
        #[arg(long)]
        rules: PathBuf,
        /// The value to check, parsed according to the rule set's kind.
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Print the run report as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// List the rules of a rule set in evaluation order.
    Rules {
        /// Path to the TOML rule set.
        #[arg(long)]
        rules: PathBuf,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Check { rules, value, json } => check(&rules, &value, json),
        Command::Rules { rules } => list(&rules).map(|()| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("vouch: {}", e);
            ExitCode::from(2)
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn check(path: &Path, value: &str, json: bool) -> VouchResult<ExitCode> {
    let rule_set = RuleSet::from_file(path)?;
    debug!(path = %path.display(), kind = %rule_set.kind(), "rule set loaded");

    let report = rule_set.check(value)?;

    if json {
        print_json(&report);
    } else {
        print_text(&report);
    }

    Ok(if report.passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn list(path: &Path) -> VouchResult<()> {
    let rule_set = RuleSet::from_file(path)?;

    println!("kind: {}", rule_set.kind());
    if rule_set.rules().is_empty() {
        println!("  (no rules: every value is accepted)");
    }
    for (index, rule) in rule_set.rules().iter().enumerate() {
        println!("  [{}] {}", index + 1, rule);
    }
    Ok(())
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_text(report: &RunReport) {
    if report.passed {
        println!("accepted");
        return;
    }
    println!("rejected:");
    for message in &report.violations {
        println!("  - {message}");
    }
}

fn print_json(report: &RunReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("vouch: failed to encode report: {e}"),
    }
}
