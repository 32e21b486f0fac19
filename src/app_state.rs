//! Implements a struct that holds the state of the web server.

use axum::extract::FromRef;

use crate::{
    api::TransactionsApi, category::CategoryCache, pagination::PaginationConfig,
    transaction::TransactionsController,
};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState<A> {
    /// The config that controls how to display pages of transactions.
    pub pagination_config: PaginationConfig,

    /// The controller for the transactions table, shared by every request.
    pub controller: TransactionsController<A>,
}

impl<A: TransactionsApi> AppState<A> {
    /// Create a new [AppState] that talks to the backend through `api`.
    ///
    /// The category cache starts empty and is filled on the first page load.
    pub fn new(api: A, pagination_config: PaginationConfig) -> Self {
        let controller =
            TransactionsController::new(api, CategoryCache::default(), &pagination_config);

        Self {
            pagination_config,
            controller,
        }
    }
}

impl<A: TransactionsApi> FromRef<AppState<A>> for TransactionsController<A> {
    fn from_ref(state: &AppState<A>) -> Self {
        state.controller.clone()
    }
}
