mod app;
mod config;
mod error;
mod handlers;
mod model;
mod state;

use crate::app::App;
use crate::config::Args;
use crate::state::AppState;
use clap::Parser;
use cubby_service::{CrudService, RecordRepository};
use cubby_storage::{InMemoryStore, MySqlStore, StoreConfig};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let state = if args.memory {
        info!("using in-memory store");
        let repository = RecordRepository::new(InMemoryStore::new());
        AppState::new(Arc::new(CrudService::new(repository)))
    } else {
        let config = StoreConfig::new(
            &args.store_server,
            &args.store_database,
            &args.store_collection,
        )?;
        info!(
            database = args.store_database,
            collection = args.store_collection,
            "connecting to mysql store"
        );
        let store = MySqlStore::connect(&config).await?;
        let repository = RecordRepository::new(store);
        AppState::new(Arc::new(CrudService::new(repository)))
    };

    let listener = tokio::net::TcpListener::bind(&args.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "starting gateway server");

    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
