//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use shopgpt::adapters::ai::{MockAiAdapter, OpenAiAdapter};
use shopgpt::adapters::persistence::JsonCatalog;
use shopgpt::adapters::report::{PdfReportWriter, TextReportWriter};
use shopgpt::adapters::ui::tui::TuiInputPort;
use shopgpt::ports::{AiPort, InputPort, ReportWriterPort};
use shopgpt::shared::{AppConfig, AppContext, ReportFormat};
use shopgpt::usecases::{CatalogService, ReportService, SummaryService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    shopgpt::adapters::ui::init_ui();

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("configuration error: {}", e))?;

    // --- Catalog: loaded once, read-only for the rest of the run ---
    let catalog_path = cfg.catalog_path_or_default();
    let catalog = CatalogService::load(&JsonCatalog::new(&catalog_path))
        .await
        .map_err(|e| anyhow::anyhow!("{} (set SHOPGPT_CATALOG_PATH)", e))?;

    // --- AI adapter ---
    let ai: Arc<dyn AiPort> = match cfg.ai_api_key() {
        Some(key) => {
            info!(
                model = %cfg.ai_model_or_default(),
                url = %cfg.ai_api_url_or_default(),
                timeout_secs = cfg.ai_timeout().as_secs(),
                "AI summaries enabled with OpenAI-compatible adapter"
            );
            Arc::new(
                OpenAiAdapter::new(
                    cfg.ai_api_url_or_default(),
                    key,
                    cfg.ai_model_or_default(),
                    cfg.ai_timeout(),
                )
                .map_err(|e| anyhow::anyhow!("{}", e))?,
            )
        }
        None => {
            warn!("SHOPGPT_AI_API_KEY / GROQ_API_KEY not set, using mock AI adapter");
            Arc::new(MockAiAdapter::new())
        }
    };

    // --- Report writer ---
    let format = cfg.report_format().map_err(|e| anyhow::anyhow!("{}", e))?;
    let writer: Arc<dyn ReportWriterPort> = match format {
        ReportFormat::Pdf => Arc::new(PdfReportWriter::new()),
        ReportFormat::Txt => Arc::new(TextReportWriter::new()),
    };
    let reports_dir = PathBuf::from(cfg.reports_dir_or_default());
    info!(path = %reports_dir.display(), format = ?format, "reports directory");

    let ctx = AppContext::new(
        Arc::new(catalog),
        Arc::new(SummaryService::new(ai)),
        Arc::new(ReportService::new(writer, reports_dir)),
    );

    // --- Run (main menu -> browse -> summary -> export) ---
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(ctx));
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
