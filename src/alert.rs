//! Error alerts shown to users when an action fails.
//!
//! Alerts are swapped into the `#alert-container` element of the base page
//! via `hx-target-error`.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// An error message and what to do about it.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// The headline.
    pub message: String,
    /// Text shown under the headline.
    pub details: String,
}

const ERROR_STYLE: &str = "p-4 mb-4 rounded-lg border border-red-300 \
    bg-red-50 text-red-800 dark:bg-gray-800 dark:text-red-400 \
    dark:border-red-800 shadow";

impl Alert {
    pub fn error(message: &str, details: &str) -> Self {
        Self {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Html<String> {
        Html(self.into_markup().into_string())
    }

    fn into_markup(self) -> Markup {
        html!(
            div role="alert" class=(ERROR_STYLE)
            {
                div class="flex items-start justify-between gap-4"
                {
                    div
                    {
                        p class="font-semibold" { (self.message) }

                        @if !self.details.is_empty() {
                            p class="mt-1 text-sm" { (self.details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Dismiss"
                        class="text-lg leading-none opacity-70 hover:opacity-100"
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "×"
                    }
                }
            }
        )
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
