//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered as HTML fragments. Error alerts are returned from HTMX
//! endpoints and swapped into the `#alert-container` element by the
//! response-targets extension, success alerts are rendered directly into the
//! same container when a page loads after a redirect.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

/// A dismissable message for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Something the user asked for has completed.
    Success {
        /// The headline of the alert.
        message: String,
        /// Optional extra text shown below the headline.
        details: String,
    },
    /// Something the user asked for could not be done.
    Error {
        /// The headline of the alert.
        message: String,
        /// Optional extra text shown below the headline.
        details: String,
    },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Success { message, details } => (
                "flex items-start gap-3 p-4 mb-4 rounded-lg border \
                text-green-800 border-green-300 bg-green-50 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
                message,
                details,
            ),
            Alert::Error { message, details } => (
                "flex items-start gap-3 p-4 mb-4 rounded-lg border \
                text-red-800 border-red-300 bg-red-50 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
                message,
                details,
            ),
        };

        html! {
            div class=(container_style) role="alert" data-alert="true"
            {
                div class="flex-1"
                {
                    p class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p class="text-sm" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    class="text-sm font-semibold underline"
                    onclick="this.closest('[data-alert]').remove()"
                {
                    "Dismiss"
                }
            }
        }
    }

    /// Render the alert as an HTML fragment with the given status code.
    pub fn into_response_with_status(self, status_code: StatusCode) -> Response {
        (status_code, Html(self.into_html().into_string())).into_response()
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_response_with_status(StatusCode::OK)
    }
}
