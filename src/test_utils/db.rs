use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    auth::{PasswordHash, User, Username, create_user},
    db::initialize,
};

/// An initialised in-memory database.
pub(crate) fn get_test_connection() -> Connection {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");
    initialize(&connection).expect("Could not initialize database.");
    connection
}

/// An initialised in-memory database shared the same way the server shares it.
pub(crate) fn get_shared_test_connection() -> Arc<Mutex<Connection>> {
    Arc::new(Mutex::new(get_test_connection()))
}

/// Insert a user with a cheap password hash.
pub(crate) fn create_test_user(connection: &Connection, username: &str) -> User {
    let password_hash = PasswordHash::new("hunter2", 4).expect("Could not hash password");

    create_user(
        Username::new(username).expect("Could not create username"),
        password_hash,
        connection,
    )
    .expect("Could not create user")
}
