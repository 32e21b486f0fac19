//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post, put},
};

use crate::{
    AppState,
    api::TransactionsApi,
    category::{create_category_endpoint, get_categories_page},
    endpoints,
    error_pages::{get_404_not_found, get_internal_server_error_page},
    theme::toggle_theme,
    transaction::{
        begin_edit_endpoint, cancel_edit_endpoint, delete_transaction_endpoint,
        get_transactions_page, get_transactions_table, go_to_page_endpoint, next_page_endpoint,
        prev_page_endpoint, quick_add_endpoint, reset_filters_endpoint, save_edit_endpoint,
        set_filter_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router<A: TransactionsApi>(state: AppState<A>) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page::<A>))
        .route(endpoints::TRANSACTIONS_TABLE, get(get_transactions_table::<A>))
        .route(endpoints::TRANSACTION_FILTERS, post(set_filter_endpoint::<A>))
        .route(endpoints::RESET_FILTERS, post(reset_filters_endpoint::<A>))
        .route(endpoints::NEXT_PAGE, post(next_page_endpoint::<A>))
        .route(endpoints::PREV_PAGE, post(prev_page_endpoint::<A>))
        .route(endpoints::GO_TO_PAGE, post(go_to_page_endpoint::<A>))
        .route(endpoints::QUICK_ADD, post(quick_add_endpoint::<A>))
        .route(endpoints::EDIT_TRANSACTION, post(begin_edit_endpoint::<A>))
        .route(endpoints::CANCEL_EDIT, post(cancel_edit_endpoint::<A>))
        .route(
            endpoints::TRANSACTION,
            put(save_edit_endpoint::<A>).delete(delete_transaction_endpoint::<A>),
        )
        .route(
            endpoints::CATEGORIES_VIEW,
            get(get_categories_page::<A>).post(create_category_endpoint::<A>),
        )
        .route(endpoints::THEME, post(toggle_theme))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the transactions page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::TRANSACTIONS_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_transactions() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::TRANSACTIONS_VIEW);
    }
}
