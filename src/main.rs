mod cli;

use anyhow::Context;
use cli::Args;
use iq_label_inventory::config::{self, ConfigFile, Settings};
use iq_label_inventory::prelude::*;
use std::path::Path;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    let result = match init_tracing(args.log_level.as_deref()) {
        Ok(()) => run(args).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(1);
    }
}

/// An explicit `--log-level` wins over `RUST_LOG`; without either only warnings show.
fn log_filter(log_level: Option<&str>) -> Result<EnvFilter> {
    match log_level {
        Some(directive) => EnvFilter::try_new(directive).with_context(|| {
            format!(
                "Invalid --log-level: {}\n\n💡 Hint: Use a level such as \"debug\" or a directive such as \"iq_label_inventory=trace\"",
                directive
            )
        }),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))),
    }
}

fn init_tracing(log_level: Option<&str>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(log_level)?)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let config_file = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(args.overrides(), config_file)?;
    info!(
        server = %settings.server_url,
        user = settings.credentials.username(),
        concurrency = ?settings.concurrency,
        "resolved settings"
    );

    // Create adapters (Dependency Injection)
    let repository = IqServerClient::new(&settings.server_url, settings.credentials.clone())?;
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = HarvestInventoryUseCase::new(repository, progress_reporter);

    // Execute use case
    let response = use_case
        .execute(InventoryRequest::new(settings.concurrency))
        .await?;
    info!(
        applications = response.application_count,
        reports = response.reports.len(),
        components = response.components_found,
        labeled = response.inventory.len(),
        usages_removed = response.filter_summary.usages_removed,
        components_removed = response.filter_summary.components_removed,
        "harvest finished"
    );

    let formatter = if settings.compact {
        JsonFormatter::compact()
    } else {
        JsonFormatter::new()
    };
    let formatted_output = formatter.format(&response.inventory)?;

    // Present output
    let presenter: Box<dyn OutputPresenter> = if cli::is_stdout(&settings.output) {
        Box::new(StdoutPresenter::new())
    } else {
        Box::new(FileSystemWriter::new(settings.output.clone()))
    };
    presenter.present(&formatted_output)?;

    eprintln!("   === done ===   ");
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(Path::new(".")),
    }
}
