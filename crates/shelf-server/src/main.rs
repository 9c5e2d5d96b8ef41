//! Shelf server binary
//!
//! Serves the reading-list JSON API over HTTP. All state lives in a single
//! SQLite database opened at startup.

mod error;
mod web;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post, put};
use axum::Router;
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use shelf_core::{Config, Store};

use crate::web::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "shelfd", version, about = "Shelf reading-list server")]
struct Args {
    /// Address to listen on (overrides the config file)
    #[arg(long)]
    listen: Option<String>,

    /// Data directory for the database (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Path to the config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from_path(path).context("Failed to load configuration")?,
        None => Config::load().context("Failed to load configuration")?,
    };
    if let Some(listen) = args.listen {
        config.listen_addr = listen;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }

    let store = Store::open(&config).context("Failed to open the shelf database")?;
    info!("Database ready at {}", config.db_path().display());

    let state = Arc::new(AppState::new(store));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    info!("Listening on {}", config.listen_addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Build the application router
fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/list",
            post(web::lists::create_list).get(web::lists::all_lists),
        )
        .route(
            "/list/{list_id}",
            get(web::lists::get_list)
                .patch(web::lists::rename_list)
                .delete(web::lists::delete_list),
        )
        .route("/list/{list_id}/book", post(web::books::add_book))
        .route(
            "/list/{list_id}/book/{book_id}",
            put(web::books::update_book).delete(web::books::remove_book),
        )
        .route(
            "/list/{list_id}/book/{book_id}/note",
            post(web::notes::add_note),
        )
        .method_not_allowed_fallback(web::method_not_allowed)
        .fallback(web::not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_builds() {
        let store = Store::open_in_memory().unwrap();
        let state = Arc::new(AppState::new(store));
        let _app = router(state);
    }
}
