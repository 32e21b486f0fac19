//! Route handlers for the pagination controls.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    api::TransactionsApi,
    transaction::{controller::TransactionsController, transactions_page::render_panel},
};

/// A route handler for the "Next" button.
pub async fn next_page_endpoint<A: TransactionsApi>(
    State(controller): State<TransactionsController<A>>,
) -> Response {
    render_panel(controller.next_page().await)
}

/// A route handler for the "Previous" button.
pub async fn prev_page_endpoint<A: TransactionsApi>(
    State(controller): State<TransactionsController<A>>,
) -> Response {
    render_panel(controller.prev_page().await)
}

/// A route handler for the numbered page links.
pub async fn go_to_page_endpoint<A: TransactionsApi>(
    State(controller): State<TransactionsController<A>>,
    Path(page): Path<u64>,
) -> Response {
    render_panel(controller.go_to_page(page).await)
}
