//! Sets up the application's SQLite database.

use rusqlite::Connection;

use crate::{Error, auth::create_user_table, cash_flow::create_cash_flow_table};

/// Create the tables for the domain models if they do not already exist.
///
/// All tables are created in a single transaction, so either every table is
/// created or none of them are.
///
/// # Errors
/// Returns an [Error::SqlError] if a table could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", "ON")?;

    let transaction = connection.unchecked_transaction()?;

    create_user_table(&transaction)?;
    create_cash_flow_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
