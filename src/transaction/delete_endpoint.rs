use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    ResourceId,
    api::TransactionsApi,
    transaction::{controller::TransactionsController, transactions_page::render_panel},
};

/// A route handler for deleting a transaction, responds with the refreshed
/// panel or an alert.
pub async fn delete_transaction_endpoint<A: TransactionsApi>(
    State(controller): State<TransactionsController<A>>,
    Path(transaction_id): Path<String>,
) -> Response {
    let Ok(transaction_id) = transaction_id.parse::<ResourceId>();

    render_panel(controller.delete(&transaction_id).await)
}
