//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/cash-flows/{cash_flow_id}/edit', use [format_endpoint].

use std::fmt::Display;

/// The root route which redirects to the cash flows page.
pub const ROOT: &str = "/";
/// The landing page for logged in users, lists the user's cash flows.
pub const CASH_FLOWS_VIEW: &str = "/cash-flows";
/// The page for creating a new cash flow.
pub const NEW_CASH_FLOW_VIEW: &str = "/cash-flows/new";
/// The page for editing an existing cash flow.
pub const EDIT_CASH_FLOW_VIEW: &str = "/cash-flows/{cash_flow_id}/edit";
/// The route for getting the registration page.
pub const REGISTER_VIEW: &str = "/register";
/// The route for getting the log in page.
pub const LOG_IN_VIEW: &str = "/log_in";
/// The route for instructions for resetting the user's password.
pub const FORGOT_PASSWORD_VIEW: &str = "/forgot_password";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for logging in a user.
pub const LOG_IN_API: &str = "/api/log_in";
/// The route for the client to log out the current user.
pub const LOG_OUT: &str = "/api/log_out";
/// The route to register users.
pub const USERS: &str = "/api/users";
/// The route to create a cash flow.
pub const CASH_FLOWS_API: &str = "/api/cash-flows";
/// The route to update or delete a single cash flow.
pub const CASH_FLOW: &str = "/api/cash-flows/{cash_flow_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/users/{user_id}', '{user_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl Display) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
