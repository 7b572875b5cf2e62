//! operator-diff: structural diff of telecom operator directory snapshots
//!
//! Compares a stored baseline summary document against a second file or the
//! live summary endpoint and reports renamed, re-keyed, added, removed and
//! probably-renamed operators.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use operator_diff::{
    cli,
    config::{AppConfig, AppConfigBuilder, DiffPaths},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "operator-diff")]
#[command(version)]
#[command(about = "Structural diff of telecom operator directory snapshots", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success (changes are reported but do not fail the run)
    1  Changes detected with --fail-on-change
    2  Error occurred

EXAMPLES:
    # Compare two stored snapshots
    operator-diff diff response.json responseNew.json

    # Compare against the live endpoint and keep a copy of the body
    OPERATOR_DIFF_API_KEY=... operator-diff diff response.json --save-to responseNew.json

    # Human-readable overview in CI
    operator-diff diff response.json responseNew.json -o summary --fail-on-change

    # Download the current snapshot only
    operator-diff fetch --api-key ... -O responseNew.json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that talks to the summary endpoint
#[derive(Parser)]
struct SourceArgs {
    /// API key for the summary endpoint (falls back to the configured env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Summary endpoint URL
    #[arg(long)]
    api_base: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the baseline snapshot
    baseline: PathBuf,

    /// Path to the candidate snapshot (fetched from the endpoint if omitted)
    candidate: Option<PathBuf>,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Show at most this many table rows per category
    #[arg(long)]
    max_items: Option<usize>,

    /// Compare names case-insensitively in the fuzzy pass
    #[arg(long)]
    ignore_case: bool,

    /// Ignore names shorter than this many characters in the fuzzy pass
    #[arg(long)]
    min_name_length: Option<usize>,

    /// Skip the fuzzy rename pass
    #[arg(long)]
    no_fuzzy: bool,

    /// Exit with code 1 if any changes detected
    #[arg(long)]
    fail_on_change: bool,

    /// Save the fetched candidate body to this path
    #[arg(long)]
    save_to: Option<PathBuf>,

    #[command(flatten)]
    source: SourceArgs,
}

/// Arguments for the `fetch` subcommand
#[derive(Parser)]
struct FetchArgs {
    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a baseline snapshot with a candidate snapshot
    Diff(DiffArgs),

    /// Download the current snapshot from the summary endpoint
    Fetch(FetchArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .operator-diff.yaml in the current directory
    Init,
}

impl SourceArgs {
    fn apply(&self, mut builder: AppConfigBuilder) -> AppConfigBuilder {
        if let Some(api_base) = &self.api_base {
            builder = builder.api_base(api_base.clone());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout_secs(timeout);
        }
        builder
    }
}

/// CLI flags expressed as a config layer; default values leave file settings alone.
fn diff_overrides(cli: &Cli, args: &DiffArgs) -> AppConfig {
    let mut builder = AppConfig::builder()
        .ignore_case(args.ignore_case)
        .fuzzy(!args.no_fuzzy)
        .save_to(args.save_to.clone())
        .output_file(args.output_file.clone())
        .no_color(cli.no_color)
        .pretty(args.pretty)
        .max_items(args.max_items)
        .fail_on_change(args.fail_on_change)
        .quiet(cli.quiet);
    if let Some(len) = args.min_name_length {
        builder = builder.min_name_length(len);
    }
    if let Some(format) = args.output {
        builder = builder.output_format(format);
    }
    args.source.apply(builder).build()
}

fn fetch_overrides(cli: &Cli, args: &FetchArgs) -> AppConfig {
    let builder = AppConfig::builder().quiet(cli.quiet);
    args.source.apply(builder).build()
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    match run(cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::Diff(args) => {
            let overrides = diff_overrides(&cli, args);
            let (config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }

            let api_key = config.source.resolve_api_key(args.source.api_key.clone());
            let paths = DiffPaths {
                baseline: args.baseline.clone(),
                candidate: args.candidate.clone(),
            };
            cli::run_diff(config.into_diff_config(paths, api_key))
        }

        #[cfg(feature = "fetch")]
        Commands::Fetch(args) => {
            let overrides = fetch_overrides(&cli, args);
            let (config, _) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            let api_key = config.source.resolve_api_key(args.source.api_key.clone());
            cli::run_fetch(config.into_fetch_config(args.output_file.clone(), api_key))?;
            Ok(exit_codes::SUCCESS)
        }

        #[cfg(not(feature = "fetch"))]
        Commands::Fetch(args) => {
            let _ = fetch_overrides(&cli, args);
            anyhow::bail!("this build of operator-diff was compiled without the `fetch` feature")
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "operator-diff", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = operator_diff::config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            match action {
                ConfigAction::Show => {
                    let (config, loaded_from) =
                        operator_diff::config::load_or_default(cli.config.as_deref());
                    if let Some(path) = &loaded_from {
                        eprintln!("# Loaded from: {}", path.display());
                    } else {
                        eprintln!("# No config file found; showing defaults");
                    }
                    let yaml =
                        serde_yaml::to_string(&config).context("failed to serialize config")?;
                    print!("{yaml}");
                }
                ConfigAction::Path => {
                    eprintln!("Config file search paths (in order):");
                    for dir in operator_diff::config::search_dirs() {
                        eprintln!("  {}", dir.display());
                    }
                    eprintln!();
                    eprintln!("Recognized file names:");
                    for name in operator_diff::config::CONFIG_FILE_NAMES {
                        eprintln!("  {name}");
                    }
                    eprintln!();
                    match operator_diff::config::discover_config_file(cli.config.as_deref()) {
                        Some(path) => eprintln!("Active config file: {}", path.display()),
                        None => eprintln!("No config file found."),
                    }
                }
                ConfigAction::Init => {
                    let target = std::env::current_dir()
                        .context("cannot determine current directory")?
                        .join(".operator-diff.yaml");
                    if target.exists() {
                        anyhow::bail!(
                            "{} already exists. Remove it first to re-initialize.",
                            target.display()
                        );
                    }
                    let content = operator_diff::config::generate_full_example_config();
                    std::fs::write(&target, content)
                        .with_context(|| format!("failed to write {}", target.display()))?;
                    eprintln!("Created {}", target.display());
                }
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}
