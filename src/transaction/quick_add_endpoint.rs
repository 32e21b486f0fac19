use axum::{extract::State, response::Response};

use crate::{
    api::TransactionsApi,
    transaction::{controller::TransactionsController, transactions_page::render_panel},
};

/// A route handler for the "Quick add" button.
///
/// Creates a placeholder transaction and responds with the refreshed panel.
pub async fn quick_add_endpoint<A: TransactionsApi>(
    State(controller): State<TransactionsController<A>>,
) -> Response {
    render_panel(controller.quick_add().await)
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};

    use crate::{
        Error,
        category::CategoryCache,
        pagination::PaginationConfig,
        test_utils::{FakeApi, Operation, assert_status_ok},
        transaction::controller::{QUICK_ADD_DESCRIPTION, TransactionsController},
    };

    use super::quick_add_endpoint;

    fn controller(api: FakeApi) -> TransactionsController<FakeApi> {
        TransactionsController::new(api, CategoryCache::default(), &PaginationConfig::default())
    }

    #[tokio::test]
    async fn creates_placeholder_transaction() {
        let api = FakeApi::with_transactions(2);

        let response = quick_add_endpoint(State(controller(api.clone()))).await;

        assert_status_ok(&response);
        let transactions = api.transactions();
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[2].description, QUICK_ADD_DESCRIPTION);
    }

    #[tokio::test]
    async fn failed_create_is_alert() {
        let api = FakeApi::with_transactions(2);
        api.fail_next(
            Operation::Create,
            Error::Request {
                url: "http://fake.test/transactions".to_owned(),
                status: 500,
            },
        );

        let response = quick_add_endpoint(State(controller(api.clone()))).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(api.transactions().len(), 2);
    }
}
