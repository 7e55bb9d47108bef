use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use launchdeck::{api, config::ServerConfig, dashboard, dataset::Dataset, models, render};

#[derive(Parser)]
#[command(name = "launchdeck")]
#[command(about = "Interactive dashboard for space launch records")]
struct Cli {
    /// Launch CSV to load (defaults to LAUNCHDECK_DATA or cleaned_space_missions.csv)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port for the HTTP server
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print KPIs and charts for a filter selection
    Summary(SummaryArgs),
}

#[derive(Args)]
struct SummaryArgs {
    /// Country to include (repeatable)
    #[arg(long)]
    country: Vec<String>,

    /// Company to include (repeatable)
    #[arg(long)]
    company: Vec<String>,

    /// First year, inclusive
    #[arg(long)]
    from: Option<i32>,

    /// Last year, inclusive
    #[arg(long)]
    to: Option<i32>,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "launchdeck=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_dataset(config: &ServerConfig) -> anyhow::Result<Dataset> {
    Dataset::load(&config.data_path)
        .with_context(|| format!("Failed to load dataset from {}", config.data_path.display()))
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Launchdeck server on {}", config.address());

    let dataset = load_dataset(&config)?;
    let app = api::create_router(dataset, &config);

    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    tracing::info!("Launchdeck listening on http://{}", config.address());

    axum::serve(listener, app).await?;
    Ok(())
}

fn summary(config: &ServerConfig, args: SummaryArgs) -> anyhow::Result<()> {
    let dataset = load_dataset(config)?;
    let selection = models::FilterSelection::from_parts(
        args.country,
        args.company,
        args.from,
        args.to,
        dataset.year_bounds(),
    )?;
    let view = dashboard::build_view(&dataset, &selection);
    print!("{}", render::render_summary(&view));
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = ServerConfig::from_env();
    if let Some(data) = cli.data {
        config.data_path = data;
    }

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await?;
        }
        Some(Commands::Summary(args)) => summary(&config, args)?,
        // Default: start server
        None => serve(config).await?,
    }

    Ok(())
}
