//! CLI entrypoint for termbridge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::sync::Arc;
use termbridge_application::{
    BulkMapUseCase, LocalCatalogPort, MapTermUseCase, RemoteTermSource, SearchTermsInput,
    SearchTermsUseCase, TokenProvider,
};
use termbridge_domain::{CodeableConcept, OutputFormat, supported_systems};
use termbridge_infrastructure::{
    ConfigLoader, FileConfig, IcdRemoteResolver, JsonCatalogResolver, OAuthClientCredentials,
    TokenCache,
};
use termbridge_presentation::{
    Cli, Command, ConsoleFormatter, JsonFormatter, OutputConfig, OutputFormatter,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .context("Failed to load configuration")?;

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    let output = OutputConfig::resolve(
        cli.output.map(Into::into),
        config.output.format,
        config.output.color,
    );
    if !output.color {
        colored::control::set_override(false);
    }
    let formatter: Box<dyn OutputFormatter> = match output.format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    info!("Starting termbridge");

    // === Dependency Injection ===
    let (local, remote) = build_sources(&config)?;
    let mapper = MapTermUseCase::new(local.clone(), remote.clone());

    let rendered = match command {
        Command::Search {
            query,
            source,
            system,
        } => {
            let use_case = SearchTermsUseCase::new(local, remote);
            let mut input = SearchTermsInput::new(query, source.into());
            if let Some(system) = system {
                input = input.with_category(system);
            }
            // ERROR envelopes are still a successful run
            formatter.format_search(&use_case.execute(input).await)
        }
        Command::Map { id, fhir } => {
            let mapping = mapper.map_by_id(&id).await?;
            let concept = fhir.then(|| CodeableConcept::from_mapping(&mapping));
            formatter.format_mapping(&mapping, concept.as_ref())
        }
        Command::Condition { id, patient } => {
            let condition = mapper.condition_for(&id, patient.as_deref()).await?;
            formatter.format_condition(&condition)
        }
        Command::BulkMap { ids } => {
            let report = BulkMapUseCase::new(mapper).execute(&ids).await?;
            formatter.format_bulk(&report)
        }
        Command::Systems => formatter.format_systems(supported_systems()),
    };

    println!("{}", rendered);

    Ok(())
}

/// Build the two source adapters around one shared HTTP client.
fn build_sources(
    config: &FileConfig,
) -> Result<(Arc<dyn LocalCatalogPort>, Arc<dyn RemoteTermSource>)> {
    let client = reqwest::Client::builder()
        .timeout(config.remote.timeout())
        .build()
        .context("Failed to build HTTP client")?;

    let exchange = OAuthClientCredentials::new(
        client.clone(),
        config.remote.token_url.clone(),
        config.remote.client_id.clone(),
        config.remote.client_secret.clone(),
    )
    .with_scope(config.remote.scope.clone());
    let tokens: Arc<dyn TokenProvider> = Arc::new(TokenCache::new(Arc::new(exchange)));

    let remote: Arc<dyn RemoteTermSource> = Arc::new(IcdRemoteResolver::new(
        client,
        config.remote.base_url.clone(),
        tokens,
    ));
    let local: Arc<dyn LocalCatalogPort> =
        Arc::new(JsonCatalogResolver::new(config.local.data_file.clone()));

    Ok((local, remote))
}
