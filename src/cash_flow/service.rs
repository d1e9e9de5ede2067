//! The owner scoped operations on cash flows used by the HTTP handlers.

use crate::{
    Error,
    auth::UserID,
    cash_flow::{
        domain::{CashFlow, CashFlowDraft, CashFlowId},
        store::CashFlowStore,
    },
};

/// Creates, lists, updates and deletes the cash flows of one user at a time.
///
/// The caller's user ID must be passed to every method. A cash flow that
/// belongs to someone else is treated exactly like one that does not exist.
#[derive(Debug, Clone)]
pub struct CashFlowService<S> {
    store: S,
}

impl<S: CashFlowStore> CashFlowService<S> {
    /// Create a service backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All cash flows owned by `owner_id`, newest first.
    ///
    /// A blank `search_term` is ignored.
    pub fn list(
        &self,
        owner_id: UserID,
        search_term: Option<&str>,
    ) -> Result<Vec<CashFlow>, Error> {
        self.store.list(owner_id, search_term)
    }

    /// The cash flow `id` if it exists and is owned by `owner_id`.
    pub fn get_by_id(&self, owner_id: UserID, id: CashFlowId) -> Result<Option<CashFlow>, Error> {
        let cash_flow = self.store.get(owner_id, id)?;

        if cash_flow.is_none() {
            tracing::debug!("user {owner_id} requested cash flow {id} which they cannot see");
        }

        Ok(cash_flow)
    }

    /// Record a new cash flow for `owner_id`.
    ///
    /// The owner of the new cash flow is always `owner_id`.
    pub fn create(&self, owner_id: UserID, draft: CashFlowDraft) -> Result<CashFlow, Error> {
        let cash_flow = self.store.create(owner_id, draft)?;
        tracing::info!("user {owner_id} created cash flow {}", cash_flow.id);

        Ok(cash_flow)
    }

    /// Replace the fields of the cash flow `id`.
    ///
    /// Returns `None` if the cash flow does not exist or is not owned by `owner_id`.
    pub fn update(
        &self,
        owner_id: UserID,
        id: CashFlowId,
        draft: CashFlowDraft,
    ) -> Result<Option<CashFlow>, Error> {
        let cash_flow = self.store.update(owner_id, id, draft)?;

        match &cash_flow {
            Some(_) => tracing::info!("user {owner_id} updated cash flow {id}"),
            None => tracing::debug!(
                "user {owner_id} tried to update cash flow {id} which they cannot see"
            ),
        }

        Ok(cash_flow)
    }

    /// Delete the cash flow `id`.
    ///
    /// Returns `None` if the cash flow does not exist or is not owned by `owner_id`.
    pub fn delete(&self, owner_id: UserID, id: CashFlowId) -> Result<Option<CashFlow>, Error> {
        let cash_flow = self.store.delete(owner_id, id)?;

        match &cash_flow {
            Some(_) => tracing::info!("user {owner_id} deleted cash flow {id}"),
            None => tracing::debug!(
                "user {owner_id} tried to delete cash flow {id} which they cannot see"
            ),
        }

        Ok(cash_flow)
    }
}
