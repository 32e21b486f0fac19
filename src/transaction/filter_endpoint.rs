//! Route handlers for the filter bar.

use axum::{Form, extract::State, response::Response};
use serde::Deserialize;

use crate::{
    api::TransactionsApi,
    transaction::{
        controller::TransactionsController, page_state::FilterField,
        transactions_page::render_panel,
    },
};

/// The form sent when one of the filter selects changes.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterForm {
    /// Which filter changed, `category` or `type`.
    pub field: String,
    /// The new value, empty to clear the filter.
    #[serde(default)]
    pub value: String,
}

/// A route handler that sets one filter and renders page 1.
pub async fn set_filter_endpoint<A: TransactionsApi>(
    State(controller): State<TransactionsController<A>>,
    Form(form): Form<FilterForm>,
) -> Response {
    let field = match form.field.parse::<FilterField>() {
        Ok(field) => field,
        Err(error) => return error.into_alert_response(),
    };

    render_panel(controller.set_filter(field, &form.value).await)
}

/// A route handler that clears every filter and renders page 1.
pub async fn reset_filters_endpoint<A: TransactionsApi>(
    State(controller): State<TransactionsController<A>>,
) -> Response {
    render_panel(controller.reset_filters().await)
}
