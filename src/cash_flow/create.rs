//! Cash flow creation page and endpoint.

use axum::{
    Extension, Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};

use crate::{
    auth::UserID,
    cash_flow::{
        CashFlowService, SQLiteCashFlowStore,
        domain::{CashFlowDraft, CashFlowFormData},
        form::{FormMethod, FormValues, cash_flow_form},
        list::{Flash, cash_flows_redirect_url},
    },
    endpoints,
    html::{FORM_CONTAINER_STYLE, alert_container, base},
    navigation::NavBar,
};

/// Render the cash flow creation page.
pub async fn get_new_cash_flow_page() -> Response {
    new_cash_flow_view().into_response()
}

/// Handle cash flow creation form submission.
///
/// An invalid amount re-renders the form with an error message and nothing is saved.
pub async fn create_cash_flow_endpoint(
    State(service): State<CashFlowService<SQLiteCashFlowStore>>,
    Extension(user_id): Extension<UserID>,
    Form(form_data): Form<CashFlowFormData>,
) -> Response {
    let draft = match CashFlowDraft::try_from(&form_data) {
        Ok(draft) => draft,
        Err(error) => {
            return new_cash_flow_form(&FormValues::from(&form_data), Some(&error.to_string()))
                .into_response();
        }
    };

    match service.create(user_id, draft) {
        Ok(_) => (
            HxRedirect(cash_flows_redirect_url(Flash::Created)),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => {
            tracing::error!("An unexpected error occurred while creating a cash flow: {error}");
            error.into_alert_response()
        }
    }
}

fn new_cash_flow_view() -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_CASH_FLOW_VIEW).into_html();
    let form = new_cash_flow_form(&FormValues::default(), None);

    let content = html! {
        (nav_bar)
        (alert_container(None))
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="mb-4 text-xl font-bold" { "New Cash Flow" }
            (form)
        }
    };

    base("New Cash Flow", &content)
}

fn new_cash_flow_form(values: &FormValues, amount_error: Option<&str>) -> Markup {
    cash_flow_form(
        FormMethod::Post(endpoints::CASH_FLOWS_API),
        values,
        amount_error,
        "Create Cash Flow",
    )
}
