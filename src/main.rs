use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use showcase_gate::catalog::{self, CatalogController, DemoLaunch, DemoTargets};
use showcase_gate::config::ShowcaseConfig;
use showcase_gate::db::Database;
use showcase_gate::gate::AccessGate;
use showcase_gate::models::{Filter, NavigationOutcome};
use showcase_gate::navigation::{NavigationController, SystemBrowser};
use showcase_gate::session::SessionStore;
use showcase_gate::{api, render};

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Password-gated project showcase")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the showcase API and the embedded demo assets
    Serve {
        /// Port for HTTP API (defaults to the configured port)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Unlock the showcase with the shared password
    Login { secret: String },
    /// Lock the showcase again
    Logout,
    /// Show whether the showcase is unlocked
    Status,
    /// Request a route (e.g. `dashboard`, `neo-bank`) and show what happens
    Open { path: String },
    /// List projects, optionally filtered by category
    Catalog {
        /// `all`, `trading-app`, `web-app`, `mobile-app` or `ai-project`
        #[arg(short, long, default_value = "all")]
        filter: String,
    },
    /// Show the details of a project
    Details { id: u32 },
    /// Launch a project's demo
    Demo {
        id: u32,
        /// Also open an embedded demo outside the application
        #[arg(long)]
        fullscreen: bool,
    },
    /// Write the effective configuration to the config directory
    InitConfig,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "showcase_gate=debug,tower_http=debug".into()),
    );

    // stdout carries command output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_database(config: &ShowcaseConfig) -> anyhow::Result<Database> {
    let db = match &config.db_path {
        Some(path) => Database::open(path.clone())?,
        None => Database::open_default()?,
    };
    db.migrate()?;
    Ok(db)
}

fn open_gate(config: &ShowcaseConfig) -> anyhow::Result<AccessGate<Database>> {
    let db = open_database(config)?;
    Ok(AccessGate::new(config.credential(), SessionStore::new(db)))
}

fn open_navigation(
    config: &ShowcaseConfig,
) -> anyhow::Result<NavigationController<Database, SystemBrowser>> {
    Ok(NavigationController::new(
        open_gate(config)?,
        SystemBrowser::new(),
        &config.external_url,
    ))
}

fn open_catalog(config: &ShowcaseConfig) -> anyhow::Result<CatalogController<SystemBrowser>> {
    let entries = match &config.catalog_path {
        Some(path) => catalog::load_catalog(path)?,
        None => catalog::builtin_catalog(),
    };
    Ok(CatalogController::new(
        entries,
        DemoTargets::builtin(&config.external_url),
        SystemBrowser::with_origin(format!("http://127.0.0.1:{}", config.port)),
    ))
}

/// Catalog commands sit behind the same gate as the dashboard.
fn require_dashboard(
    navigation: &NavigationController<Database, SystemBrowser>,
) -> anyhow::Result<()> {
    match navigation.navigate_path("dashboard") {
        NavigationOutcome::Render(_) => Ok(()),
        _ => anyhow::bail!("Showcase is locked. Run `showcase login <password>` first."),
    }
}

async fn serve(config: &ShowcaseConfig, port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting showcase server on port {}", port);

    let db = open_database(config)?;
    let state = api::AppState::from_config(db, config)?;
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .with_context(|| format!("Failed to bind port {}", port))?;
    tracing::info!("Showcase listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = ShowcaseConfig::load();

    match cli.command {
        Some(Commands::Serve { port }) => {
            serve(&config, port.unwrap_or(config.port)).await?;
        }
        None => {
            serve(&config, config.port).await?;
        }
        Some(Commands::Login { secret }) => {
            let gate = open_gate(&config)?;
            gate.attempt(&secret)?;
            println!("Unlocked.");
        }
        Some(Commands::Logout) => {
            let navigation = open_navigation(&config)?;
            navigation.logout();
            println!("Locked.");
        }
        Some(Commands::Status) => {
            if open_gate(&config)?.is_unlocked() {
                println!("unlocked");
            } else {
                println!("locked");
            }
        }
        Some(Commands::Open { path }) => {
            let navigation = open_navigation(&config)?;
            match navigation.navigate_path(&path) {
                NavigationOutcome::RenderGate => println!("login"),
                NavigationOutcome::Render(view) => println!("{}", view.as_str()),
                NavigationOutcome::RedirectToGate => println!("redirected to login"),
                NavigationOutcome::LeftApplication(url) => println!("left application for {}", url),
            }
        }
        Some(Commands::Catalog { filter }) => {
            let navigation = open_navigation(&config)?;
            require_dashboard(&navigation)?;

            let filter = Filter::from_str(&filter)
                .ok_or_else(|| anyhow::anyhow!("Unknown filter: {}", filter))?;
            let mut catalog = open_catalog(&config)?;
            let visible = catalog.set_filter(filter);
            print!("{}", render::render_catalog(filter, &visible));
        }
        Some(Commands::Details { id }) => {
            let navigation = open_navigation(&config)?;
            require_dashboard(&navigation)?;

            let catalog = open_catalog(&config)?;
            let entry = catalog
                .entry(id)
                .ok_or_else(|| anyhow::anyhow!("Project {} not found", id))?;
            println!("{}", catalog.describe(entry));
        }
        Some(Commands::Demo { id, fullscreen }) => {
            let navigation = open_navigation(&config)?;
            require_dashboard(&navigation)?;

            let mut catalog = open_catalog(&config)?;
            let launch = catalog
                .open_demo_by_id(id)
                .ok_or_else(|| anyhow::anyhow!("Project {} not found", id))?;
            match launch {
                DemoLaunch::Ignored => println!("Project {} has no demo.", id),
                DemoLaunch::External(url) => println!("Opened {}", url),
                DemoLaunch::Embedded(demo_ref) => {
                    println!(
                        "Embedded demo {} is served at http://127.0.0.1:{}{}/",
                        demo_ref,
                        config.port,
                        api::DEMO_ASSETS_PATH
                    );
                    if fullscreen {
                        catalog.request_fullscreen();
                    }
                    catalog.close_demo();
                }
            }
        }
        Some(Commands::InitConfig) => {
            config.save()?;
            println!("Configuration written.");
        }
    }

    Ok(())
}
