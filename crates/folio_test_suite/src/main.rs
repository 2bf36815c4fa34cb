//! Scenario runner
//!
//! Usage:
//!   folio-scenarios              # Run all scenarios
//!   folio-scenarios --filter hot # Run scenarios matching "hot"
//!   folio-scenarios --list       # List all scenarios

use anyhow::Result;
use clap::Parser;
use folio_test_suite::{runner::TestRunner, scenarios};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio-scenarios")]
#[command(about = "Run the headless Folio dock and page scenarios")]
#[command(version)]
struct Cli {
    /// List every scenario and exit
    #[arg(long)]
    list: bool,

    /// Only run scenarios whose name or suite contains this pattern
    #[arg(short, long)]
    filter: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if cli.list {
        println!("Available scenario suites:");
        for suite in scenarios::all_suites() {
            println!("\n  {}:", suite.name);
            for case in &suite.cases {
                println!("    - {}", case.name);
            }
        }
        return Ok(());
    }

    println!("╔══════════════════════════════════════════╗");
    println!("║         FOLIO HEADLESS SCENARIOS         ║");
    println!("╚══════════════════════════════════════════╝\n");

    let mut runner = TestRunner::new();
    for suite in scenarios::all_suites() {
        runner.add_suite(suite);
    }

    if let Some(ref pattern) = cli.filter {
        println!("Running scenarios matching: {}\n", pattern);
        runner.filter(pattern);
    }

    let result = runner.run();
    result.print_summary();

    if result.all_passed() {
        println!("\nAll scenarios passed!");
        Ok(())
    } else {
        std::process::exit(1);
    }
}
