//! Defines the route handlers for the transactions page and its table panel.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use crate::{
    Error,
    api::TransactionsApi,
    theme::Theme,
    transaction::{
        controller::TransactionsController,
        view::{transactions_page_view, transactions_panel},
        view_model::TransactionsTableView,
    },
};

/// Render the transactions page.
///
/// A full page load reloads the category cache and fetches the current page
/// again.
pub async fn get_transactions_page<A: TransactionsApi>(
    State(controller): State<TransactionsController<A>>,
    jar: CookieJar,
) -> Response {
    let theme = Theme::from_jar(&jar);

    // The table still renders with raw category IDs if this fails.
    let _ = controller.load_categories().await;

    let view = match controller.refresh().await {
        Ok(view) => view,
        Err(Error::Superseded) => match controller.current_view() {
            Ok(view) => view,
            Err(error) => return error.into_response(),
        },
        Err(error) => return error.into_response(),
    };

    Html(transactions_page_view(&view, theme).into_string()).into_response()
}

/// Fetch the current page again and render the panel.
pub async fn get_transactions_table<A: TransactionsApi>(
    State(controller): State<TransactionsController<A>>,
) -> Response {
    render_panel(controller.refresh().await)
}

/// Render the result of a table action as the panel, or as an alert on error.
pub(crate) fn render_panel(result: Result<TransactionsTableView, Error>) -> Response {
    match result {
        Ok(view) => Html(transactions_panel(&view).into_string()).into_response(),
        Err(error) => error.into_alert_response(),
    }
}
