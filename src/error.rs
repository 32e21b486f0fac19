//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    ResourceId,
    alert::Alert,
    error_pages::{InternalServerError, NotFoundError},
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The backend answered with a non-success HTTP status.
    #[error("HTTP request to {url} failed with status {status}")]
    Request {
        /// The URL that was requested.
        url: String,
        /// The HTTP status code of the response.
        status: u16,
    },

    /// The request never produced a response, e.g. the backend is down.
    #[error("could not reach {url}: {message}")]
    Network {
        /// The URL that was requested.
        url: String,
        /// The transport error reported by the HTTP client.
        message: String,
    },

    /// The backend answered with a body that is not the expected JSON.
    #[error("could not decode the response from {url}: {message}")]
    InvalidResponse {
        /// The URL that was requested.
        url: String,
        /// The decoding error.
        message: String,
    },

    /// An edit was requested for a transaction that is not on the current page.
    #[error("transaction {0} is not on the current page")]
    NotOnPage(ResourceId),

    /// A save or cancel arrived for a row that is not being edited.
    #[error("no edit is in progress for this transaction")]
    NoActiveEdit,

    /// A save arrived while the previous save for the same row is still running.
    #[error("the transaction is already being saved")]
    SaveInProgress,

    /// A newer request was issued while this one was in flight, so its
    /// response was discarded.
    #[error("the response was superseded by a newer request")]
    Superseded,

    /// A submitted form field could not be read, e.g. a non-numeric amount.
    #[error("invalid value \"{value}\" for {field}")]
    InvalidField {
        /// The name of the form field.
        field: &'static str,
        /// The submitted text.
        value: String,
    },

    /// Could not acquire the lock on the view state.
    #[error("could not acquire the view state lock")]
    StateLockError,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::Request { url, status } => {
                tracing::error!("request to {url} failed with status {status}");
                InternalServerError {
                    description: "The transactions server returned an error.",
                    fix: "Check that the backend is healthy, then reload the page.",
                }
                .into_response()
            }
            Error::Network { url, message } => {
                tracing::error!("could not reach {url}: {message}");
                InternalServerError {
                    description: "Could not reach the transactions server.",
                    fix: "Check that the backend is running and the API URL is correct.",
                }
                .into_response()
            }
            Error::StateLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            // HTMX does not swap 204 responses, which leaves the newer render in place.
            Error::Superseded => return StatusCode::NO_CONTENT.into_response(),
            Error::Request { url, status } => (
                if status == StatusCode::NOT_FOUND.as_u16() {
                    StatusCode::NOT_FOUND
                } else {
                    StatusCode::BAD_GATEWAY
                },
                Alert::error(
                    "Request failed",
                    &format!("HTTP request to {url} failed with status {status}."),
                ),
            ),
            Error::Network { url, .. } => (
                StatusCode::BAD_GATEWAY,
                Alert::error(
                    "Could not reach the transactions server",
                    &format!(
                        "No response from {url}. Check that the backend is running and try again."
                    ),
                ),
            ),
            Error::InvalidResponse { url, .. } => (
                StatusCode::BAD_GATEWAY,
                Alert::error(
                    "Unexpected response",
                    &format!("The response from {url} could not be read."),
                ),
            ),
            Error::NotOnPage(id) => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Could not edit transaction",
                    &format!(
                        "Transaction {id} is not on this page. \
                        Try refreshing the page to see if it has been deleted."
                    ),
                ),
            ),
            Error::NoActiveEdit => (
                StatusCode::CONFLICT,
                Alert::error(
                    "Nothing to save",
                    "This transaction is not being edited. Click edit and try again.",
                ),
            ),
            Error::SaveInProgress => (
                StatusCode::CONFLICT,
                Alert::error("Save in progress", "Wait for the previous save to finish."),
            ),
            Error::InvalidField { field, value } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Alert::error(
                    "Invalid input",
                    &format!("\"{value}\" is not a valid {field}."),
                ),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                ),
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}
