//! Hashing the passwords users choose and checking them at log in.

use bcrypt::{hash, verify};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use zxcvbn::{Score, feedback::Feedback, zxcvbn};

use crate::Error;

/// A bcrypt hash, as stored in the `password` column of the user table.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// The bcrypt cost used for real accounts.
    pub const DEFAULT_COST: u32 = bcrypt::DEFAULT_COST;

    /// Hash `raw_password` as is, with no strength check.
    ///
    /// Passwords chosen by users should go through [hash_new_password] instead.
    pub fn new(raw_password: &str, cost: u32) -> Result<Self, Error> {
        hash(raw_password, cost)
            .map(Self)
            .map_err(|error| Error::HashingError(error.to_string()))
    }

    /// Whether `raw_password` is the password this hash was made from.
    pub fn verify(&self, raw_password: &str) -> Result<bool, Error> {
        verify(raw_password, &self.0).map_err(|error| Error::HashingError(error.to_string()))
    }
}

impl ToSql for PasswordHash {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

impl FromSql for PasswordHash {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        String::column_result(value).map(Self)
    }
}

/// Hash a password a user has just chosen, at [PasswordHash::DEFAULT_COST].
///
/// # Errors
///
/// Returns [Error::TooWeak] with zxcvbn's advice if the password scores
/// below three, or [Error::HashingError] if bcrypt fails.
pub fn hash_new_password(raw_password: &str) -> Result<PasswordHash, Error> {
    let analysis = zxcvbn(raw_password, &[]);

    if !matches!(analysis.score(), Score::Three | Score::Four) {
        let feedback = analysis.feedback().unwrap_or(&Feedback::default()).to_string();
        return Err(Error::TooWeak(feedback));
    }

    PasswordHash::new(raw_password, PasswordHash::DEFAULT_COST)
}
