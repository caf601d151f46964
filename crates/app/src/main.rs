mod config;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, AppServicesError, Catalog, LookupService, ServicesConfig, StatsService,
    StrokeOrderService,
};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

use crate::config::{Overrides, Settings, normalize_sqlite_url, prepare_sqlite_file};

#[derive(Parser, Debug)]
#[command(name = "kanji-drill", version, about = "Kanji study and self-test drills")]
struct Cli {
    /// Config file (defaults to ./kanji-drill.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// `SQLite` database URL or path for the stats record.
    #[arg(long = "db", global = true)]
    database_url: Option<String>,
    /// Base URL of the stroke-order SVG directory.
    #[arg(long, global = true)]
    stroke_url: Option<String>,
    /// Never fetch stroke-order diagrams.
    #[arg(long, global = true)]
    offline: bool,
    /// Log filter, e.g. `info` or `services=debug`.
    #[arg(long = "log", global = true)]
    log_filter: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Open the desktop window (default).
    Ui,
    /// Print the lifetime totals and exit.
    Stats,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            config: self.config.clone(),
            database_url: self.database_url.clone(),
            stroke_order_url: self.stroke_url.clone(),
            offline: self.offline,
            log_filter: self.log_filter.clone(),
        }
    }
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        self.services.catalog()
    }

    fn stats(&self) -> Arc<StatsService> {
        self.services.stats()
    }

    fn stroke_order(&self) -> Arc<StrokeOrderService> {
        self.services.stroke_order()
    }

    fn lookup(&self) -> Arc<LookupService> {
        self.services.lookup()
    }
}

fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?} ({err}), using info");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn print_stats(services: &AppServices) {
    let stats = services.stats().snapshot();
    let accuracy = stats
        .accuracy_percent()
        .map_or_else(|| "-".to_owned(), |pct| format!("{pct}%"));
    println!("total reviews:     {}", stats.total_reviews());
    println!("correct reviews:   {}", stats.correct_reviews());
    println!("accuracy:          {accuracy}");
    println!("modules completed: {}", stats.modules_completed());
}

/// Open services over the database, or over memory when the file cannot be
/// created. Stats then start from zero and are not saved.
async fn open_services(
    db_url: &str,
    config: &ServicesConfig,
) -> Result<AppServices, AppServicesError> {
    match prepare_sqlite_file(db_url) {
        Ok(()) => AppServices::new_sqlite(db_url, config).await,
        Err(err) => {
            tracing::warn!(error = %err, db = db_url, "cannot prepare database, stats will not be saved");
            AppServices::in_memory(config).await
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli.overrides())?;
    init_tracing(&settings.log_filter);

    let base = std::env::current_dir()?;
    let db_url = normalize_sqlite_url(&settings.database_url, &base)?;
    tracing::info!(db = %db_url, offline = settings.offline, "starting");

    let services = open_services(&db_url, &settings.services_config()).await?;

    match cli.command.unwrap_or(Command::Ui) {
        Command::Stats => {
            print_stats(&services);
            Ok(())
        }
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // Some dev setups default tao windows to always-on-top.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Kanji Drill")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
