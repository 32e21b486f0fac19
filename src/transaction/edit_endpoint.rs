//! Route handlers for editing a transaction inline.

use axum::{
    Form,
    extract::{Path, State},
    response::Response,
};

use crate::{
    ResourceId,
    api::TransactionsApi,
    transaction::{
        controller::TransactionsController, edit_session::EditTransactionForm,
        transactions_page::render_panel,
    },
};

/// A route handler that makes a row editable.
pub async fn begin_edit_endpoint<A: TransactionsApi>(
    State(controller): State<TransactionsController<A>>,
    Path(transaction_id): Path<String>,
) -> Response {
    let Ok(transaction_id) = transaction_id.parse::<ResourceId>();

    render_panel(controller.begin_edit(&transaction_id))
}

/// A route handler that saves the edited row.
///
/// On failure the row stays editable and an alert is shown.
pub async fn save_edit_endpoint<A: TransactionsApi>(
    State(controller): State<TransactionsController<A>>,
    Path(transaction_id): Path<String>,
    Form(form): Form<EditTransactionForm>,
) -> Response {
    let Ok(transaction_id) = transaction_id.parse::<ResourceId>();

    render_panel(controller.save_edit(&transaction_id, form).await)
}

/// A route handler that leaves edit mode without saving.
pub async fn cancel_edit_endpoint<A: TransactionsApi>(
    State(controller): State<TransactionsController<A>>,
) -> Response {
    render_panel(controller.cancel_edit().await)
}
