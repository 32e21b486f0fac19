//! Cashbook is a web front end for managing financial transactions.
//!
//! The transactions live in an external REST backend (a json-server style
//! API). This library serves the HTML pages and fragments that list, page
//! through, filter, create, edit and delete them.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod api;
mod app_state;
mod category;
mod endpoints;
mod error;
mod error_pages;
mod html;
mod logging;
mod navigation;
mod pagination;
mod resource_id;
mod routing;
mod theme;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use api::{DEFAULT_API_URL, HttpApi, TransactionQuery, TransactionsApi, TransactionsPage};
pub use app_state::AppState;
pub use category::{Category, CategoryCache, NewCategory};
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use pagination::PaginationConfig;
pub use resource_id::ResourceId;
pub use routing::build_router;
pub use transaction::{
    NewTransaction, Transaction, TransactionPatch, TransactionType, TransactionsController,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
