//! Marketing Studio: campaign execution, scheduling and performance dashboard.
//!
//! `serve` runs the HTTP service; `render` prints one page to stdout.

use clap::{Parser, Subcommand};
use studio_api::ApiServer;
use studio_core::{AppConfig, Catalog};
use studio_view::{
    render_page, PromotionCalendar, StatusFilter, StudioEvent, Tab, ThemeMode, ViewState,
};
use tracing::{error, info, warn};

const DEFAULT_LOG_FILTER: &str = "marketing_studio=info,studio_api=info,tower_http=info";

#[derive(Parser, Debug)]
#[command(name = "marketing-studio")]
#[command(about = "Execute, monitor, and optimize approved marketing campaigns")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the studio over HTTP
    Serve {
        /// Bind address (overrides config)
        #[arg(long, env = "MARKETING_STUDIO__API__HOST")]
        host: Option<String>,

        /// HTTP port (overrides config)
        #[arg(long, env = "MARKETING_STUDIO__API__HTTP_PORT")]
        http_port: Option<u16>,

        /// Prometheus exporter port (overrides config)
        #[arg(long, env = "MARKETING_STUDIO__METRICS__PORT")]
        metrics_port: Option<u16>,

        /// Campaign catalog JSON file (built-in catalog when omitted)
        #[arg(long, env = "MARKETING_STUDIO__STUDIO__CATALOG_PATH")]
        catalog: Option<String>,
    },

    /// Render a single studio page to stdout
    Render {
        /// Tab: overview, scheduler, execution, performance
        #[arg(long, default_value = "overview")]
        tab: String,

        /// Case-insensitive search on campaign names
        #[arg(long, default_value = "")]
        query: String,

        /// Status filter: all, approved, running, paused, completed
        #[arg(long, default_value = "all")]
        status: String,

        /// Campaign to select (first campaign when omitted)
        #[arg(long)]
        campaign: Option<String>,

        /// Render with execution toggled on
        #[arg(long, default_value_t = false)]
        running: bool,

        /// Theme: light or dark (overrides config)
        #[arg(long)]
        theme: Option<String>,

        /// Campaign catalog JSON file (built-in catalog when omitted)
        #[arg(long, env = "MARKETING_STUDIO__STUDIO__CATALOG_PATH")]
        catalog: Option<String>,
    },
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

fn load_config() -> AppConfig {
    AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    })
}

/// Build the view state a `render` invocation asks for, replaying it as the
/// same interactions a user would make from the initial screen.
fn render_state(
    catalog: &Catalog,
    tab: &str,
    query: &str,
    status: &str,
    campaign: Option<&str>,
    running: bool,
) -> anyhow::Result<ViewState> {
    let tab = Tab::parse(tab).ok_or_else(|| anyhow::anyhow!("unknown tab '{tab}'"))?;
    let status =
        StatusFilter::parse(status).ok_or_else(|| anyhow::anyhow!("unknown status '{status}'"))?;

    let mut events = vec![
        StudioEvent::SelectTab(tab),
        StudioEvent::Search(query.to_string()),
        StudioEvent::FilterStatus(status),
    ];
    if let Some(id) = campaign {
        events.push(StudioEvent::SelectCampaign(id.to_string()));
    }
    if running {
        events.push(StudioEvent::ToggleExecution);
    }

    let mut state = ViewState::initial(catalog);
    for event in events {
        state.apply(event, catalog);
    }
    Ok(state)
}

async fn serve(
    mut config: AppConfig,
    host: Option<String>,
    http_port: Option<u16>,
    metrics_port: Option<u16>,
    catalog_path: Option<String>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.api.host = host;
    }
    if let Some(port) = http_port {
        config.api.http_port = port;
    }
    if let Some(port) = metrics_port {
        config.metrics.port = port;
    }
    if catalog_path.is_some() {
        config.studio.catalog_path = catalog_path;
    }

    info!(
        node_id = %config.node_id,
        http_port = config.api.http_port,
        metrics_port = config.metrics.port,
        theme = %config.studio.theme,
        "Configuration loaded"
    );

    let catalog = Catalog::load_or_builtin(config.studio.catalog_path.as_deref())?;
    let api_server = ApiServer::new(config, catalog);

    if let Err(e) = api_server.start_metrics().await {
        error!(error = %e, "Failed to start metrics exporter");
    }

    info!("Marketing Studio is ready to serve traffic");

    // Blocks until shutdown
    api_server.start_http().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            http_port,
            metrics_port,
            catalog,
        } => {
            init_tracing(true);
            info!("Marketing Studio starting up");
            serve(load_config(), host, http_port, metrics_port, catalog).await
        }
        Commands::Render {
            tab,
            query,
            status,
            campaign,
            running,
            theme,
            catalog,
        } => {
            init_tracing(false);
            let config = load_config();
            let catalog_path = catalog.or(config.studio.catalog_path);
            let catalog = Catalog::load_or_builtin(catalog_path.as_deref())?;

            let theme_name = theme.unwrap_or(config.studio.theme);
            let theme = ThemeMode::parse(&theme_name)
                .ok_or_else(|| anyhow::anyhow!("unknown theme '{theme_name}'"))?;

            let state = render_state(
                &catalog,
                &tab,
                &query,
                &status,
                campaign.as_deref(),
                running,
            )?;
            let calendar = PromotionCalendar::from_catalog(&catalog);
            print!("{}", render_page(&state, &catalog, &theme, &calendar));
            Ok(())
        }
    }
}
