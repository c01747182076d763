//! # Laundry Bot Main Entry Point
//!
//! This is the main entry point for the Laundry Bot application.
//! It initializes logging, loads configuration, seeds the machine pool,
//! starts the health server, and runs the Telegram bot.

use anyhow::Result;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bot;
mod config;
mod laundry;
mod services;
mod utils;

use crate::bot::handlers::BotHandler;
use crate::config::Config;
use crate::laundry::dispatcher::LoadDispatcher;
use crate::laundry::registry::MachineRegistry;
use crate::services::countdown::CountdownService;
use crate::services::health::HealthService;
use crate::services::notify::TelegramNotifier;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "laundry_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Laundry Bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - HTTP Port: {}", config.http_port);

    // Seed the fixed machine pool
    let registry = Arc::new(MachineRegistry::new());
    info!("Machine pool seeded with {} machines", registry.len());

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let notifier = Arc::new(TelegramNotifier::new(bot.clone()));
    let countdown = CountdownService::new(notifier);
    let dispatcher = Arc::new(LoadDispatcher::new(registry.clone(), countdown));
    let handler = BotHandler::new(registry.clone(), dispatcher);
    info!("Telegram bot initialized successfully");

    // Initialize health service
    let health_service = HealthService::new(registry.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    // Run both the bot and health server concurrently
    let bot_task = tokio::spawn(async move {
        let storage: std::sync::Arc<InMemStorage<()>> = InMemStorage::new().into();
        Dispatcher::builder(bot, handler.schema())
            .dependencies(dptree::deps![storage])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    info!("Application stopped");
    Ok(())
}
