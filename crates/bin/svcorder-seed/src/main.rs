//! # svcorder-seed — sample data loader
//!
//! Composition root that wires a storage adapter to the seeder and runs it once.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Connect to `MongoDB`, or build the in-memory store for a dry run
//! - Construct repository implementations (adapters)
//! - Run the seeder, then optionally verify what was written
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use svcorder_adapter_storage_memory::{MemoryOrderRepository, MemoryServiceRepository};
use svcorder_adapter_storage_mongodb::{MongoOrderRepository, MongoServiceRepository};
use svcorder_app::ports::{OrderRepository, ServiceRepository};
use svcorder_app::services::seeder::Seeder;
use tracing_subscriber::EnvFilter;

use crate::config::{Backend, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    execute(&config).await
}

/// Run the configured backend once. Failures are logged before being returned.
async fn execute(config: &Config) -> anyhow::Result<()> {
    let result = match config.database.backend {
        Backend::MongoDb => seed_mongodb(config).await,
        Backend::Memory => {
            tracing::info!("seeding in-memory store, nothing will be persisted");
            let seeder = Seeder::new(
                MemoryServiceRepository::default(),
                MemoryOrderRepository::default(),
            );
            run(&seeder, config.seed.verify).await
        }
    };
    if let Err(err) = &result {
        tracing::error!(error = ?err, "seed run failed");
    }
    result
}

async fn seed_mongodb(config: &Config) -> anyhow::Result<()> {
    tracing::info!(database = %config.database.name, "seeding MongoDB");
    let db = svcorder_adapter_storage_mongodb::Config {
        uri: config.database.uri.clone(),
        database: config.database.name.clone(),
    }
    .build()
    .await
    .context("failed to connect to MongoDB")?;

    let seeder = Seeder::new(
        MongoServiceRepository::new(&db),
        MongoOrderRepository::new(&db),
    );
    run(&seeder, config.seed.verify).await
}

async fn run<S, O>(seeder: &Seeder<S, O>, verify: bool) -> anyhow::Result<()>
where
    S: ServiceRepository,
    O: OrderRepository,
{
    let report = seeder.seed().await.context("seeding failed")?;
    tracing::info!(
        services = report.services_inserted,
        orders = report.orders_inserted,
        "seed complete"
    );

    if verify {
        let report = seeder.verify().await.context("verification failed")?;
        tracing::info!(
            services = report.services,
            orders = report.orders,
            "verification passed"
        );
    }

    Ok(())
}
