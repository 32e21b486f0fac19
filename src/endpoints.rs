//! The route URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}', use [format_endpoint].

use std::fmt::Display;

/// The root route which redirects to the transactions page.
pub const ROOT: &str = "/";
/// The page for displaying transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The transactions panel (filters, table and pagination) without the page around it.
pub const TRANSACTIONS_TABLE: &str = "/transactions/table";
/// The route for setting one filter.
pub const TRANSACTION_FILTERS: &str = "/transactions/filters";
/// The route for clearing all filters.
pub const RESET_FILTERS: &str = "/transactions/filters/reset";
/// The route for going to the next page.
pub const NEXT_PAGE: &str = "/transactions/pages/next";
/// The route for going to the previous page.
pub const PREV_PAGE: &str = "/transactions/pages/prev";
/// The route for going to a numbered page.
pub const GO_TO_PAGE: &str = "/transactions/pages/{page}";
/// The route for creating a placeholder transaction.
pub const QUICK_ADD: &str = "/transactions/quick_add";
/// The route for making a row editable.
pub const EDIT_TRANSACTION: &str = "/transactions/{transaction_id}/edit";
/// The route for cancelling the current edit.
pub const CANCEL_EDIT: &str = "/transactions/edit/cancel";
/// The route to save (PUT) or delete (DELETE) a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The page for listing and creating categories.
pub const CATEGORIES_VIEW: &str = "/categories";
/// The route for toggling dark mode.
pub const THEME: &str = "/theme";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transactions/{transaction_id}', '{transaction_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
