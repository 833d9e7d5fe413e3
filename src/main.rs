use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use contract_lens::adapters::http::app_router;
use contract_lens::application::handlers::{
    ExportReportQuery, ListTemplatesHandler, ListTemplatesQuery,
};
use contract_lens::bootstrap::{build_provider, Services};
use contract_lens::config::{AppConfig, LogFormat, ServerConfig};
use contract_lens::domain::contract::{ContractSubmission, RiskFilter, SourceLanguage};
use contract_lens::domain::template::{CategoryFilter, TemplateCatalog};
use contract_lens::ports::ExportFormat;

#[derive(Debug, Parser)]
#[command(name = "contract-lens", version, about = "Contract risk analysis backed by a hosted LLM")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the HTTP API
    Serve,
    /// Analyze a local text file and print the report
    Analyze {
        /// UTF-8 text file containing the contract
        file: PathBuf,
        /// Translate from Hindi before analysis
        #[arg(long)]
        hindi: bool,
        /// Only list clauses at this risk level (All, Low, Medium, High)
        #[arg(long, default_value = "All")]
        risk: RiskFilter,
        /// Report format (markdown or html)
        #[arg(long, default_value = "markdown")]
        format: ExportFormat,
    },
    /// List the built-in contract templates
    Templates {
        /// Only show templates in this category
        #[arg(long)]
        category: Option<String>,
    },
}

fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);
    match server.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}

async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let provider = build_provider(&config.ai).context("failed to create generation service")?;
    let services = Services::new(provider, &config.ai);
    let app = app_router(&services, &config.server.cors_origins_list());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, "contract-lens listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn analyze(
    config: AppConfig,
    file: PathBuf,
    hindi: bool,
    risk: RiskFilter,
    format: ExportFormat,
) -> anyhow::Result<()> {
    let language = if hindi {
        SourceLanguage::Hindi
    } else {
        SourceLanguage::English
    };
    let submission = ContractSubmission::from_file(&file, language).await?;

    let provider = build_provider(&config.ai).context("failed to create generation service")?;
    let services = Services::new(provider, &config.ai);

    services.submit_analysis.handle_submission(submission).await?;
    let report = services
        .export_report
        .handle(ExportReportQuery {
            filter: risk,
            format,
        })
        .await?;

    println!("{}", report.content);
    Ok(())
}

fn list_templates(category: Option<String>) {
    let category = category
        .and_then(|c| c.parse::<CategoryFilter>().ok())
        .unwrap_or_default();
    let handler = ListTemplatesHandler::new(Arc::new(TemplateCatalog::builtin().clone()));
    let result = handler.handle(ListTemplatesQuery { category });

    if result.templates.is_empty() {
        println!("No templates in category '{}'.", result.selected);
        return;
    }
    for template in &result.templates {
        println!("{}  {}  [{}]", template.id, template.title, template.category);
        println!("    {}", template.description);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;
    init_tracing(&config.server);

    match cli.command {
        Command::Serve => serve(config).await,
        Command::Analyze {
            file,
            hindi,
            risk,
            format,
        } => analyze(config, file, hindi, risk, format).await,
        Command::Templates { category } => {
            list_templates(category);
            Ok(())
        }
    }
}
