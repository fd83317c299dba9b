use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;
use sumcheck::config::Config;
use sumcheck::harness::{self, RunSummary};

#[derive(Parser)]
#[command(
    name = "sumcheck",
    about = "Integer addition and its fixture-driven check harness"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Add two integers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },

    /// Run the addition cases and report pass/fail
    Check {
        /// Path to config file
        #[arg(short, long, default_value = "sumcheck.toml")]
        config: PathBuf,

        /// Treat known-bad fixtures as failures
        #[arg(long)]
        strict: bool,

        /// Print the run summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the configured cases without running them
    List {
        /// Path to config file
        #[arg(short, long, default_value = "sumcheck.toml")]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    sumcheck::logging::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Add { a, b } => {
            println!("{}", sumcheck::checked_add(a, b)?);
            Ok(())
        }
        Command::Check {
            config,
            strict,
            json,
        } => {
            let cfg = load_config(&config)?;
            let strict = cfg.harness.effective_strict(strict);
            let summary = harness::run_cases(&cfg.all_cases());
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
            if !summary.is_success(strict) {
                bail!(
                    "{} failed, {} unexpected passes, {} known bad (strict: {strict})",
                    summary.failed,
                    summary.unexpected_passes,
                    summary.known_bad
                );
            }
            Ok(())
        }
        Command::List { config } => {
            let cfg = load_config(&config)?;
            for case in cfg.all_cases() {
                println!("{case}");
            }
            Ok(())
        }
    }
}

fn load_config(path: &std::path::Path) -> Result<Config> {
    let cfg = Config::load_or_default(path)?;
    cfg.validate()?;
    Ok(cfg)
}

fn print_summary(summary: &RunSummary) {
    for report in &summary.reports {
        println!("{:<32} {}", report.case.name, report.outcome);
    }
    println!(
        "\n{} cases: {} passed, {} failed, {} known bad, {} unexpected passes",
        summary.total(),
        summary.passed,
        summary.failed,
        summary.known_bad,
        summary.unexpected_passes
    );
}
