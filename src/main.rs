use std::sync::Arc;

use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{App, HttpServer};
use anyhow::Context;
use chrono::Utc;
use tracing::{error, info};
use tracing_appender::rolling::{self, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;

mod api;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod routes;
mod seed;
mod store;
mod utils;

use config::Config;
use db::init_db;
use store::{HealthCheck, MySqlStore, SeedStore};

const STARTUP_DB_FAILURE: &str = "Database connection check failed at startup. \
    The API will keep running and return 503 for database-backed endpoints.";

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Daily rolling log, mirrored to stdout
    let file_appender = rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .filename_prefix("workit-api")
        .filename_suffix("log")
        .max_log_files(config.log_retention_days)
        .build(&config.log_dir)
        .with_context(|| format!("failed to open log directory {}", config.log_dir))?;
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking.and(std::io::stdout))
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .init();

    let pool = init_db(&config).context("invalid DATABASE_URL")?;
    let store = Arc::new(MySqlStore::new(pool));

    if config.schema_tooling {
        store
            .ensure_schema()
            .await
            .context("failed to create database schema")?;
        info!("Database schema is up to date");
        return Ok(());
    }

    log_startup_database_status(store.as_ref()).await;

    if config.seed_enabled() {
        match seed::ensure_seeded(store.as_ref(), Utc::now().date_naive()).await {
            Ok(_) => {}
            Err(e) if e.is_unavailable() => {
                error!(error = %e, "Skipping seed because the database is unavailable.");
            }
            Err(e) => return Err(e).context("failed to seed the database"),
        }
    }

    info!(addr = %config.server_addr, env = ?config.environment, "Server starting...");

    let server_addr = config.server_addr.clone();
    let serve_docs = config.environment.is_development();

    HttpServer::new(move || {
        let store = store.clone();
        let api_prefix = config.api_prefix.clone();

        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .configure(|cfg| {
                if serve_docs {
                    docs::configure(cfg);
                }
            })
            .configure(move |cfg| {
                routes::register_store(cfg, store);
                routes::configure(cfg, &api_prefix);
            })
    })
    .bind(server_addr)?
    .run()
    .await?;

    Ok(())
}

async fn log_startup_database_status(health: &dyn HealthCheck) {
    if health.can_connect().await {
        info!("Database connection check succeeded at startup.");
    } else {
        error!("{STARTUP_DB_FAILURE}");
    }
}
