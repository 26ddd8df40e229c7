//! Bakery order tracker
//!
//! Keeps bakery orders and their cakes in memory. Each line on stdin is an
//! intent (create/delete an order, add/delete a cake); after every change the
//! whole order list is rendered again to stdout.
//!
//! Uses hexagonal (ports & adapters) architecture: the domain defines the
//! store, id source and view ports, adapters implement them.

use std::io;

use anyhow::Result;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod view;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::{InMemoryOrderRepository, SequentialIdGenerator};
use app::{OrderService, Tracker};
use config::Config;
use view::{run_session, TerminalView};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing to stderr (stdout is the render surface)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,bakery_tracker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting bakery tracker...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let orders = InMemoryOrderRepository::new();
    let ids = SequentialIdGenerator::starting_at(config.id_origin);
    let view = TerminalView::new(config.view_format, io::stdout());
    tracing::info!(
        view = %view.format(),
        id_origin = config.id_origin,
        "Tracker configured"
    );

    // Create application services
    let service = OrderService::new(orders, ids);
    let mut tracker = Tracker::new(service, view);

    // Read intents from stdin until EOF or `quit`
    let input = BufReader::new(tokio::io::stdin());
    let summary = run_session(&mut tracker, input, &mut io::stderr()).await?;

    let state = tracker.state();
    tracing::info!(
        orders = state.current().map_or(0, <[_]>::len),
        publishes = state.publish_count(),
        handled = summary.handled,
        rejected = summary.rejected,
        "Shutting down"
    );

    Ok(())
}
