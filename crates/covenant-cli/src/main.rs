use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use covenant_analysis::enforcement::report::resolve_timestamp;
use covenant_analysis::enforcement::reporters::{available_formats, create_reporter, write_artifacts};
use covenant_analysis::RuleOrchestrator;
use covenant_core::config::CliOverrides;
use covenant_core::constants::DEFAULT_IMPLEMENTATION_DIR;
use covenant_core::events::EventDispatcher;
use covenant_core::{CovenantConfig, RuleId};

mod progress;
mod root;

use progress::ProgressPrinter;

#[derive(Parser, Debug)]
#[command(
    name = "covenant",
    version,
    about = "Governance compliance check: verification singularity, canonical immutability, prohibited language, phase boundaries"
)]
struct Cli {
    #[arg(
        long,
        help = "Scan root (default: working directory, or its parent inside the implementation directory)"
    )]
    root: Option<PathBuf>,
    #[arg(
        long = "only",
        value_name = "RULE",
        help = "Run only this rule (key, kebab-case key, or number); repeatable"
    )]
    only: Vec<RuleId>,
    #[arg(long, help = "Directory receiving the report artifacts (default: working directory)")]
    output_dir: Option<String>,
    #[arg(long, help = "Fixed RFC 3339 report timestamp")]
    timestamp: Option<String>,
    #[arg(long, help = "Expected SHA-256 of the canonical artifact")]
    canonical_digest: Option<String>,
    #[arg(long, help = "Supersession ledger path, relative to the root")]
    ledger: Option<String>,
    #[arg(long, default_value_t = false, help = "Print the resolved configuration as TOML and exit")]
    print_config: bool,
    #[arg(long, value_name = "FORMAT", help = "Also print the report to stdout (console or json)")]
    format: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    covenant_core::tracing::init_tracing();
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let implementation_dir = std::env::var("COVENANT_IMPLEMENTATION_DIR")
        .unwrap_or_else(|_| DEFAULT_IMPLEMENTATION_DIR.to_string());
    let root = root::resolve_root(cli.root.as_deref(), &cwd, &implementation_dir);

    let overrides = CliOverrides {
        output_dir: cli.output_dir.clone(),
        report_timestamp: cli.timestamp.clone(),
        expected_digest: cli.canonical_digest.clone(),
        ledger_path: cli.ledger.clone(),
    };
    let config = CovenantConfig::load(&root, Some(&overrides))
        .with_context(|| format!("invalid configuration for {}", root.display()))?;

    if cli.print_config {
        print!("{}", config.resolved().to_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    let reporter = cli
        .format
        .as_deref()
        .map(|format| {
            create_reporter(format).with_context(|| {
                format!(
                    "unknown report format '{format}' (expected one of: {})",
                    available_formats().join(", ")
                )
            })
        })
        .transpose()?;

    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(ProgressPrinter::default()));
    let orchestrator = RuleOrchestrator::new(&config)
        .context("invalid rule patterns")?
        .with_dispatcher(dispatcher)
        .only(&cli.only);

    let timestamp = resolve_timestamp(config.report.timestamp.as_deref());
    let output = orchestrator.execute(&root, timestamp);

    let output_dir = config.report.output_dir_in(&cwd);
    write_artifacts(&output_dir, &config.report, &output, orchestrator.dispatcher())
        .context("failed to write governance artifacts")?;

    if let Some(reporter) = reporter {
        let rendered = reporter.generate(&output.report).map_err(anyhow::Error::msg)?;
        println!("\n{rendered}");
    }

    tracing::debug!(skipped = output.skipped.len(), "run finished");
    Ok(ExitCode::from(output.report.exit_code()))
}
