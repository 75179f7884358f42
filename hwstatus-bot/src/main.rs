//! Homework Status Bot
//!
//! Watches the review status of the student's latest homework and relays
//! every change to a Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and knobs from the environment (and `.env`)
//! - Repositories: review API and messaging API behind traits
//! - Services: best-effort notification delivery
//! - Scheduler: the poll, detect and notify loop
//!
//! The bot runs until interrupted. The only fatal error is missing
//! credentials at startup.

mod config;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use chrono::Utc;
use hwstatus_client::{PracticumClient, TelegramClient};
use hwstatus_core::Watermark;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::{HttpHomeworkRepository, TelegramMessageRepository};
use crate::scheduler::StatusPoller;
use crate::service::StandardNotifier;

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hwstatus_bot=debug,hwstatus_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting homework status bot");

    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!("Failed to load .env file: {}", e);
        }
    }

    // Load configuration
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!("CRITICAL: {:#}. Bot stopped", e);
            return Err(e);
        }
    };
    info!(
        "Loaded configuration: endpoint={}, chat_id={}, retry_interval={:?}",
        config.practicum_endpoint, config.telegram_chat_id, config.retry_interval
    );

    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let practicum = PracticumClient::with_client(
        config.practicum_endpoint.clone(),
        config.practicum_token.clone(),
        http.clone(),
    );
    let telegram = TelegramClient::with_client(
        config.telegram_api_url.clone(),
        config.telegram_token.clone(),
        http,
    );

    let homeworks = Arc::new(HttpHomeworkRepository::new(practicum));
    let messages = Arc::new(TelegramMessageRepository::new(
        telegram,
        config.telegram_chat_id.clone(),
    ));
    let notifier = Arc::new(StandardNotifier::new(messages));

    let watermark = Watermark::lookback_from(Utc::now(), config.lookback)
        .context("LOOKBACK_DAYS reaches outside the supported date range")?;
    let mut poller = StatusPoller::new(config, homeworks, notifier, watermark);

    info!("Bot initialized successfully");

    poller.run_until(shutdown_signal()).await;

    info!(
        "Bot stopped (watermark: {})",
        poller.state().watermark
    );

    Ok(())
}

/// Loads and validates configuration from environment variables
fn load_config() -> Result<Config> {
    let config = Config::from_env().context("Invalid configuration")?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Completes when the process receives Ctrl+C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
