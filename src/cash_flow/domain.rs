//! Core cash flow domain types.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Error, auth::UserID};

/// Identifies a cash flow. Generated when the cash flow is created and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashFlowId(Uuid);

impl CashFlowId {
    /// Create a new random ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CashFlowId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CashFlowId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Display for CashFlowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl FromStr for CashFlowId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl ToSql for CashFlowId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_string()))
    }
}

impl FromSql for CashFlowId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowType {
    /// Money received, e.g. income.
    #[serde(rename = "CASH_IN")]
    CashIn,
    /// Money spent, e.g. an expense.
    #[serde(rename = "CASH_OUT")]
    CashOut,
}

impl CashFlowType {
    /// The name used in forms and in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            CashFlowType::CashIn => "CASH_IN",
            CashFlowType::CashOut => "CASH_OUT",
        }
    }

    /// The name shown to users.
    pub fn display_name(&self) -> &'static str {
        match self {
            CashFlowType::CashIn => "Cash in",
            CashFlowType::CashOut => "Cash out",
        }
    }
}

impl Display for CashFlowType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CashFlowType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CASH_IN" => Ok(CashFlowType::CashIn),
            "CASH_OUT" => Ok(CashFlowType::CashOut),
            other => Err(Error::InvalidCashFlowType(other.to_owned())),
        }
    }
}

impl ToSql for CashFlowType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for CashFlowType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error: Error| FromSqlError::Other(Box::new(error)))
    }
}

/// A positive amount of money in the smallest unit of the currency.
///
/// Amounts fit in 32 bits so that any number of them can be summed in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Amount(i64);

impl Amount {
    /// The largest amount that can be stored.
    pub const MAX: i64 = i32::MAX as i64;

    /// Create an amount.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidAmount] if `amount` is zero, negative or
    /// greater than [Amount::MAX].
    pub fn new(amount: i64) -> Result<Self, Error> {
        if amount <= 0 || amount > Self::MAX {
            return Err(Error::InvalidAmount(amount));
        }

        Ok(Self(amount))
    }

    /// The amount as a 64 bit integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl ToSql for Amount {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        self.0.to_sql()
    }
}

impl FromSql for Amount {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let amount = value.as_i64()?;
        Amount::new(amount).map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// The fields of a cash flow that the owner chooses, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashFlowDraft {
    /// Whether the money came in or went out.
    pub cash_flow_type: CashFlowType,
    /// Where the money came from or went to.
    pub source: String,
    /// A short title.
    pub label: String,
    /// How much money.
    pub amount: Amount,
    /// An optional note.
    pub description: Option<String>,
}

impl CashFlowDraft {
    /// Validate the fields of a cash flow.
    ///
    /// A blank `description` is stored as no description.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidAmount] if `amount` is not a valid [Amount].
    pub fn new(
        cash_flow_type: CashFlowType,
        source: &str,
        label: &str,
        amount: i64,
        description: Option<&str>,
    ) -> Result<Self, Error> {
        let amount = Amount::new(amount)?;
        let description = description
            .filter(|description| !description.trim().is_empty())
            .map(str::to_owned);

        Ok(Self {
            cash_flow_type,
            source: source.to_owned(),
            label: label.to_owned(),
            amount,
            description,
        })
    }
}

/// Money that came in or went out for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashFlow {
    /// The ID of the cash flow.
    pub id: CashFlowId,
    /// The user that recorded the cash flow.
    pub owner_id: UserID,
    /// Whether the money came in or went out.
    pub cash_flow_type: CashFlowType,
    /// Where the money came from or went to.
    pub source: String,
    /// A short title.
    pub label: String,
    /// How much money.
    pub amount: Amount,
    /// An optional note.
    pub description: Option<String>,
    /// When the cash flow was recorded, in UTC.
    pub created_at: OffsetDateTime,
    /// When the cash flow was last changed, in UTC.
    pub updated_at: OffsetDateTime,
}

/// Form data for creating and editing cash flows.
///
/// The owner is always the logged in user, so any `owner_id` field in the
/// submitted form is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CashFlowFormData {
    /// `CASH_IN` or `CASH_OUT`.
    #[serde(rename = "type")]
    pub cash_flow_type: CashFlowType,
    /// Where the money came from or went to.
    pub source: String,
    /// A short title.
    pub label: String,
    /// The unvalidated amount.
    pub amount: i64,
    /// An optional note, blank means none.
    #[serde(default)]
    pub description: Option<String>,
}

impl TryFrom<&CashFlowFormData> for CashFlowDraft {
    type Error = Error;

    fn try_from(form: &CashFlowFormData) -> Result<Self, Self::Error> {
        CashFlowDraft::new(
            form.cash_flow_type,
            &form.source,
            &form.label,
            form.amount,
            form.description.as_deref(),
        )
    }
}
