//! Persistence for cash flows.
//!
//! Every method takes the ID of the owning user, so it is not possible to read
//! or change another user's cash flows through a [CashFlowStore].

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, Row};
use time::OffsetDateTime;

use crate::{
    Error,
    auth::UserID,
    cash_flow::domain::{CashFlow, CashFlowDraft, CashFlowId},
};

/// Handles the creation, retrieval and removal of a user's cash flows.
pub trait CashFlowStore {
    /// Insert a new cash flow owned by `owner_id`.
    fn create(&self, owner_id: UserID, draft: CashFlowDraft) -> Result<CashFlow, Error>;

    /// Get the cash flow `id`, or `None` if it does not exist or belongs to another user.
    fn get(&self, owner_id: UserID, id: CashFlowId) -> Result<Option<CashFlow>, Error>;

    /// Get all cash flows owned by `owner_id`, newest first.
    ///
    /// If `search` is given, only cash flows with `search` in their label,
    /// source or description are returned. Matching ignores case.
    fn list(&self, owner_id: UserID, search: Option<&str>) -> Result<Vec<CashFlow>, Error>;

    /// Replace the fields of the cash flow `id` with `draft`.
    ///
    /// Returns `None` if it does not exist or belongs to another user.
    fn update(
        &self,
        owner_id: UserID,
        id: CashFlowId,
        draft: CashFlowDraft,
    ) -> Result<Option<CashFlow>, Error>;

    /// Remove the cash flow `id` and return it.
    ///
    /// Returns `None` if it does not exist or belongs to another user.
    fn delete(&self, owner_id: UserID, id: CashFlowId) -> Result<Option<CashFlow>, Error>;
}

const COLUMNS: &str =
    "id, owner_id, type, source, label, amount, description, created_at, updated_at";

/// Stores cash flows in a SQLite database.
///
/// The user table must exist before the cash flow table, see [create_cash_flow_table].
#[derive(Debug, Clone)]
pub struct SQLiteCashFlowStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteCashFlowStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("could not acquire database lock: {error}");
            Error::DatabaseLockError
        })
    }

    fn map_row(row: &Row) -> Result<CashFlow, rusqlite::Error> {
        Ok(CashFlow {
            id: row.get(0)?,
            owner_id: UserID::new(row.get(1)?),
            cash_flow_type: row.get(2)?,
            source: row.get(3)?,
            label: row.get(4)?,
            amount: row.get(5)?,
            description: row.get(6)?,
            created_at: row.get(7)?,
            updated_at: row.get(8)?,
        })
    }
}

impl CashFlowStore for SQLiteCashFlowStore {
    /// # Errors
    ///
    /// Returns an [Error::SqlError] if `owner_id` does not refer to a user or
    /// there is some other SQL error.
    fn create(&self, owner_id: UserID, draft: CashFlowDraft) -> Result<CashFlow, Error> {
        let now = OffsetDateTime::now_utc();
        let connection = self.lock()?;

        let cash_flow = connection
            .prepare(&format!(
                "INSERT INTO cash_flow ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
                RETURNING {COLUMNS}"
            ))?
            .query_row(
                (
                    CashFlowId::new(),
                    owner_id.as_i64(),
                    draft.cash_flow_type,
                    draft.source,
                    draft.label,
                    draft.amount,
                    draft.description,
                    now,
                ),
                Self::map_row,
            )?;

        Ok(cash_flow)
    }

    fn get(&self, owner_id: UserID, id: CashFlowId) -> Result<Option<CashFlow>, Error> {
        let cash_flow = self
            .lock()?
            .prepare(&format!(
                "SELECT {COLUMNS} FROM cash_flow WHERE id = ?1 AND owner_id = ?2"
            ))?
            .query_row((id, owner_id.as_i64()), Self::map_row)
            .optional()?;

        Ok(cash_flow)
    }

    fn list(&self, owner_id: UserID, search: Option<&str>) -> Result<Vec<CashFlow>, Error> {
        let pattern = search
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(like_pattern);

        self.lock()?
            .prepare(&format!(
                "SELECT {COLUMNS} FROM cash_flow
                WHERE owner_id = ?1
                AND (?2 IS NULL
                    OR label LIKE ?2 ESCAPE '\\'
                    OR source LIKE ?2 ESCAPE '\\'
                    OR description LIKE ?2 ESCAPE '\\')
                ORDER BY created_at DESC, rowid DESC"
            ))?
            .query_map((owner_id.as_i64(), pattern), Self::map_row)?
            .map(|maybe_cash_flow| maybe_cash_flow.map_err(Error::from))
            .collect()
    }

    fn update(
        &self,
        owner_id: UserID,
        id: CashFlowId,
        draft: CashFlowDraft,
    ) -> Result<Option<CashFlow>, Error> {
        let now = OffsetDateTime::now_utc();

        let cash_flow = self
            .lock()?
            .prepare(&format!(
                "UPDATE cash_flow
                SET type = ?3, source = ?4, label = ?5, amount = ?6, description = ?7, updated_at = ?8
                WHERE id = ?1 AND owner_id = ?2
                RETURNING {COLUMNS}"
            ))?
            .query_row(
                (
                    id,
                    owner_id.as_i64(),
                    draft.cash_flow_type,
                    draft.source,
                    draft.label,
                    draft.amount,
                    draft.description,
                    now,
                ),
                Self::map_row,
            )
            .optional()?;

        Ok(cash_flow)
    }

    fn delete(&self, owner_id: UserID, id: CashFlowId) -> Result<Option<CashFlow>, Error> {
        let cash_flow = self
            .lock()?
            .prepare(&format!(
                "DELETE FROM cash_flow WHERE id = ?1 AND owner_id = ?2 RETURNING {COLUMNS}"
            ))?
            .query_row((id, owner_id.as_i64()), Self::map_row)
            .optional()?;

        Ok(cash_flow)
    }
}

/// Wrap `term` in wildcards for a `LIKE` query, escaping the characters `LIKE` treats specially.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');

    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }

    pattern.push('%');
    pattern
}

/// Create the cash flow table.
///
/// # Errors
///
/// This function will return an error if the SQL query failed.
pub fn create_cash_flow_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS cash_flow (
            id TEXT PRIMARY KEY,
            owner_id INTEGER NOT NULL,
            type TEXT NOT NULL CHECK (type IN ('CASH_IN', 'CASH_OUT')),
            source TEXT NOT NULL,
            label TEXT NOT NULL,
            amount INTEGER NOT NULL CHECK (amount > 0),
            description TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            FOREIGN KEY(owner_id) REFERENCES user(id) ON UPDATE CASCADE ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_cash_flow_owner_created
            ON cash_flow(owner_id, created_at);",
    )
}
