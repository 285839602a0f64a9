//! CLI entrypoint for docquery
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use docquery_application::{
    DocumentCatalog, NoQueryProgress, QueryLogger, QueryProgressNotifier, RetrievalEngine,
    RunQueryUseCase, ThemeSynthesizer,
};
use docquery_domain::Severity;
use docquery_infrastructure::{
    ConfigLoader, FileConfig, JsonDocumentCatalog, JsonlQueryLogger, UnconfiguredCatalog,
};
use docquery_presentation::{
    Cli, ConsoleFormatter, OutputConfig, OutputFormatter, ProgressReporter, RequestFile,
    bind_request,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const EXIT_QUERY_FAILED: u8 = 1;
const EXIT_INVALID: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let _log_guard = match init_logging(cli.verbose, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_INVALID);
        }
    };

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_INVALID)
        }
    }
}

/// Install the stderr log layer plus an optional plain-text file layer.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .ok_or_else(|| anyhow!("invalid log file path: {}", path.display()))?;
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

async fn run(cli: Cli) -> Result<ExitCode> {
    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting docquery");

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = file_config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => error!("{}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        for issue in issues.iter().filter(|i| i.is_error()) {
            eprintln!("{}", issue);
        }
        return Ok(ExitCode::from(EXIT_INVALID));
    }

    let output = OutputConfig::resolve(
        file_config.output.format,
        cli.output.map(Into::into),
        file_config.output.color,
        cli.quiet,
    );
    if !output.color {
        colored::control::set_override(false);
    }

    // === Request binding ===
    let (defaults, _) = file_config.defaults.to_query_defaults();
    let request_file = cli.request.as_deref().map(RequestFile::load).transpose();
    let request = match request_file.and_then(|file| bind_request(&cli, file, &defaults)) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::from(EXIT_INVALID));
        }
    };

    // === Dependency Injection ===
    let catalog: Arc<dyn DocumentCatalog> = match file_config.catalog.resolve_path().0 {
        Some(path) => Arc::new(JsonDocumentCatalog::new(path)),
        None => Arc::new(UnconfiguredCatalog),
    };
    let (engine, synthesizer) = build_services(&file_config)?;

    let mut use_case = RunQueryUseCase::new(catalog, engine, synthesizer);
    let query_log = cli
        .query_log
        .clone()
        .or_else(|| file_config.logging.query_log_path());
    if let Some(path) = query_log {
        match JsonlQueryLogger::open(&path) {
            Ok(logger) => {
                info!("Query log: {}", path.display());
                let logger: Arc<dyn QueryLogger> = Arc::new(logger);
                use_case = use_case.with_query_logger(logger);
            }
            Err(e) => warn!("Could not open query log {}: {}", path.display(), e),
        }
    }

    // === Execution ===
    let progress: Box<dyn QueryProgressNotifier> = if output.show_progress {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(NoQueryProgress)
    };

    match use_case
        .execute_with_progress(request, progress.as_ref())
        .await
    {
        Ok(result) => {
            println!("{}", ConsoleFormatter.render(&result, output.format));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(ExitCode::from(EXIT_QUERY_FAILED))
        }
    }
}

#[cfg(feature = "http")]
fn build_services(
    config: &FileConfig,
) -> Result<(Arc<dyn RetrievalEngine>, Arc<dyn ThemeSynthesizer>)> {
    use docquery_infrastructure::{
        DEFAULT_RETRIEVAL_TIMEOUT_SECS, DEFAULT_THEMES_TIMEOUT_SECS, HttpRetrievalEngine,
        HttpThemeSynthesizer, UnconfiguredThemeSynthesizer,
    };

    let endpoint = config
        .retrieval
        .endpoint()
        .ok_or_else(|| anyhow!("retrieval.endpoint is not set"))?;
    let engine = HttpRetrievalEngine::new(
        endpoint,
        config.retrieval.timeout(DEFAULT_RETRIEVAL_TIMEOUT_SECS),
    )?;

    let synthesizer: Arc<dyn ThemeSynthesizer> = match config.themes.endpoint() {
        Some(endpoint) => Arc::new(HttpThemeSynthesizer::new(
            endpoint,
            config.themes.timeout(DEFAULT_THEMES_TIMEOUT_SECS),
        )?),
        None => Arc::new(UnconfiguredThemeSynthesizer),
    };

    Ok((Arc::new(engine), synthesizer))
}

#[cfg(not(feature = "http"))]
fn build_services(
    _config: &FileConfig,
) -> Result<(Arc<dyn RetrievalEngine>, Arc<dyn ThemeSynthesizer>)> {
    Err(anyhow!(
        "docquery was built without the `http` feature; no retrieval engine is available"
    ))
}
