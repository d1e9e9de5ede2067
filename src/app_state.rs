//! The state shared by all request handlers.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use rusqlite::Connection;
use sha2::{Digest, Sha512};
use time::Duration;

use crate::{
    Error,
    auth::DEFAULT_COOKIE_DURATION,
    cash_flow::{CashFlowService, SQLiteCashFlowStore},
    db::initialize,
    timezone::get_local_offset_or_error,
};

/// Everything a handler may need: cookie settings, the server's timezone,
/// the user database and the cash flow service.
///
/// Handlers take narrower views of this via [FromRef].
#[derive(Debug, Clone)]
pub struct AppState {
    /// Signs and encrypts the auth cookie.
    pub cookie_key: Key,

    /// How long the auth cookie lasts after each request.
    pub cookie_duration: Duration,

    /// Canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// The connection used for user accounts.
    pub db_connection: Arc<Mutex<Connection>>,

    /// Owner scoped access to cash flows, sharing `db_connection`.
    pub cash_flows: CashFlowService<SQLiteCashFlowStore>,
}

impl AppState {
    /// Set up the database behind `db_connection` and build the state around it.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a
    /// canonical timezone name, or [Error::SqlError] if the tables could not
    /// be created.
    pub fn new(
        db_connection: Connection,
        cookie_secret: &str,
        local_timezone: &str,
    ) -> Result<Self, Error> {
        get_local_offset_or_error(local_timezone)?;
        initialize(&db_connection)?;

        let db_connection = Arc::new(Mutex::new(db_connection));
        let cash_flows = CashFlowService::new(SQLiteCashFlowStore::new(db_connection.clone()));

        Ok(Self {
            cookie_key: create_cookie_key(cookie_secret),
            cookie_duration: DEFAULT_COOKIE_DURATION,
            local_timezone: local_timezone.to_owned(),
            db_connection,
            cash_flows,
        })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

impl FromRef<AppState> for CashFlowService<SQLiteCashFlowStore> {
    fn from_ref(state: &AppState) -> Self {
        state.cash_flows.clone()
    }
}

/// Derive the cookie key from the `SECRET` string.
pub fn create_cookie_key(secret: &str) -> Key {
    Key::from(&Sha512::digest(secret))
}
