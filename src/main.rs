//! Redirect-Audit main entry point
//!
//! This is the command-line interface for the Redirect-Audit checker. It either
//! serves the HTTP API or runs a single check from the terminal.

use clap::{Parser, ValueEnum};
use redirect_audit::checks::Auditor;
use redirect_audit::config::{load_config_with_hash, Config};
use redirect_audit::output::{format_markdown_report, print_summary, write_markdown_report};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Redirect-Audit: URL canonicalization checker
///
/// Redirect-Audit probes a site with a fixed catalog of URL variants, walks
/// every redirect chain hop by hop and reports which variants are handled
/// correctly, which produce duplicates and which are broken.
#[derive(Parser, Debug)]
#[command(name = "redirect-audit")]
#[command(version = "1.0.0")]
#[command(about = "A URL canonicalization checker", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Check a single site and exit instead of serving the API
    #[arg(long, value_name = "URL", conflicts_with = "dry_run")]
    check: Option<String>,

    /// User-Agent sent with every probe (with --check)
    #[arg(long, value_name = "UA", requires = "check")]
    user_agent: Option<String>,

    /// Report format (with --check)
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Write the report to a file instead of stdout (with --check)
    #[arg(short, long, value_name = "PATH", requires = "check")]
    output: Option<PathBuf>,

    /// Validate config and show the effective settings without serving
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Markdown,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
    } else if let Some(url) = &cli.check {
        handle_check(
            &config,
            url,
            cli.user_agent.as_deref(),
            cli.format,
            cli.output.as_deref(),
        )
        .await?;
    } else {
        redirect_audit::server::serve(&config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("redirect_audit=info,warn"),
            1 => EnvFilter::new("redirect_audit=debug,info"),
            2 => EnvFilter::new("redirect_audit=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so that --check output can be piped
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Redirect-Audit Dry Run ===\n");

    println!("Server:");
    println!("  Bind address: {}", config.server.bind_address);

    println!("\nProbe:");
    println!("  Timeout: {}s", config.probe.timeout_secs);
    println!("  Max hops: {}", config.probe.max_hops);
    println!("  Default User-Agent: {}", config.probe.default_user_agent);

    println!("\nChecks:");
    println!("  Fallback path: {}", config.checks.fallback_path);
    println!("  Missing page path: {}", config.checks.missing_page_path);
    println!(
        "  Canonical probe query: {}",
        config.checks.canonical_probe_query
    );
    println!("  Max sampled links: {}", config.checks.max_sampled_links);

    println!("\n✓ Configuration is valid");
}

/// Handles the --check mode: runs one audit and prints the report
async fn handle_check(
    config: &Config,
    url: &str,
    user_agent: Option<&str>,
    format: Format,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let user_agent = user_agent.unwrap_or(config.probe.default_user_agent.as_str());
    let auditor = Auditor::from_config(config)?;

    let report = match auditor.run(url, user_agent).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Check failed: {}", e);
            return Err(e.into());
        }
    };

    match (format, output) {
        (Format::Json, None) => println!("{}", serde_json::to_string_pretty(&report)?),
        (Format::Json, Some(path)) => {
            std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
            println!("✓ Report written to: {}", path.display());
        }
        (Format::Markdown, None) => {
            println!("{}", format_markdown_report(&report));
            print_summary(&report.summary());
        }
        (Format::Markdown, Some(path)) => {
            write_markdown_report(&report, path)?;
            println!("✓ Report written to: {}", path.display());
            print_summary(&report.summary());
        }
    }

    Ok(())
}
