//! Cash flow deletion endpoint.

use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    Error,
    auth::UserID,
    cash_flow::{
        CashFlowService, SQLiteCashFlowStore,
        domain::CashFlowId,
        list::{Flash, cash_flows_redirect_url},
    },
};

/// Handle cash flow deletion.
///
/// Redirects to the list page so the totals are recalculated. A cash flow
/// that does not exist or belongs to another user gets a 404 alert.
pub async fn delete_cash_flow_endpoint(
    Path(cash_flow_id): Path<CashFlowId>,
    State(service): State<CashFlowService<SQLiteCashFlowStore>>,
    Extension(user_id): Extension<UserID>,
) -> Response {
    match service.delete(user_id, cash_flow_id) {
        Ok(Some(_)) => (
            HxRedirect(cash_flows_redirect_url(Flash::Deleted)),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Ok(None) => Error::NotFound.into_alert_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while deleting cash flow {cash_flow_id}: {error}"
            );
            error.into_alert_response()
        }
    }
}
