use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hd_api::{create_app, AppState};
use hd_core::repositories::{InMemoryUserDirectory, InMemoryVerificationTokenStore};
use hd_core::services::PasswordHasher;
use hd_infra::create_mail_relay;
use hd_shared::{AppConfig, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    info!(
        environment = %config.environment,
        mail_provider = ?config.smtp.provider,
        smtp_configured = config.smtp.is_configured(),
        "Starting HostDesk functions server"
    );

    let hasher = PasswordHasher::new(config.auth.password_hash_cost);
    let directory = Arc::new(
        InMemoryUserDirectory::seeded(&hasher)
            .await
            .context("failed to seed the user directory")?,
    );
    let tokens = Arc::new(InMemoryVerificationTokenStore::new());
    let mail_relay = create_mail_relay(&config.smtp);

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let state = AppState::new(config, directory, tokens, hasher, mail_relay)
        .context("invalid site configuration")?;
    let state = web::Data::new(state);

    info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
