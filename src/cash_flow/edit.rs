//! Cash flow editing page and endpoint.

use axum::{
    Extension, Form,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};

use crate::{
    Error,
    auth::UserID,
    cash_flow::{
        CashFlowService, SQLiteCashFlowStore,
        domain::{CashFlowDraft, CashFlowFormData, CashFlowId},
        form::{FormMethod, FormValues, cash_flow_form},
        list::{Flash, cash_flows_redirect_url},
    },
    endpoints::{self, format_endpoint},
    html::{FORM_CONTAINER_STYLE, alert_container, base},
    navigation::NavBar,
};

/// Render the edit page for a cash flow owned by the logged in user.
///
/// Cash flows that do not exist or belong to another user get the 404 page.
pub async fn get_edit_cash_flow_page(
    Path(cash_flow_id): Path<CashFlowId>,
    State(service): State<CashFlowService<SQLiteCashFlowStore>>,
    Extension(user_id): Extension<UserID>,
) -> Result<Response, Error> {
    let cash_flow = service
        .get_by_id(user_id, cash_flow_id)
        .inspect_err(|error| {
            tracing::error!("Failed to retrieve cash flow {cash_flow_id}: {error}")
        })?
        .ok_or(Error::NotFound)?;

    Ok(edit_cash_flow_view(cash_flow_id, &FormValues::from(&cash_flow)).into_response())
}

/// Handle cash flow update form submission.
pub async fn update_cash_flow_endpoint(
    Path(cash_flow_id): Path<CashFlowId>,
    State(service): State<CashFlowService<SQLiteCashFlowStore>>,
    Extension(user_id): Extension<UserID>,
    Form(form_data): Form<CashFlowFormData>,
) -> Response {
    let draft = match CashFlowDraft::try_from(&form_data) {
        Ok(draft) => draft,
        Err(error) => {
            return edit_cash_flow_form(
                cash_flow_id,
                &FormValues::from(&form_data),
                Some(&error.to_string()),
            )
            .into_response();
        }
    };

    match service.update(user_id, cash_flow_id, draft) {
        Ok(Some(_)) => (
            HxRedirect(cash_flows_redirect_url(Flash::Updated)),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Ok(None) => Error::NotFound.into_alert_response(),
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while updating cash flow {cash_flow_id}: {error}"
            );
            error.into_alert_response()
        }
    }
}

fn edit_cash_flow_view(cash_flow_id: CashFlowId, values: &FormValues) -> Markup {
    let edit_endpoint = format_endpoint(endpoints::EDIT_CASH_FLOW_VIEW, cash_flow_id);
    let nav_bar = NavBar::new(&edit_endpoint).into_html();
    let form = edit_cash_flow_form(cash_flow_id, values, None);

    let content = html! {
        (nav_bar)
        (alert_container(None))
        div class=(FORM_CONTAINER_STYLE)
        {
            h1 class="mb-4 text-xl font-bold" { "Edit Cash Flow" }
            (form)
        }
    };

    base("Edit Cash Flow", &content)
}

fn edit_cash_flow_form(
    cash_flow_id: CashFlowId,
    values: &FormValues,
    amount_error: Option<&str>,
) -> Markup {
    let update_endpoint = format_endpoint(endpoints::CASH_FLOW, cash_flow_id);

    cash_flow_form(
        FormMethod::Put(&update_endpoint),
        values,
        amount_error,
        "Save Changes",
    )
}

#[cfg(test)]
mod edit_cash_flow_tests {
    use axum::{
        Extension, Form,
        extract::{Path, State},
        http::StatusCode,
        response::IntoResponse,
    };

    use crate::{
        Error,
        auth::User,
        cash_flow::{
            CashFlow, CashFlowService, SQLiteCashFlowStore,
            domain::{Amount, CashFlowDraft, CashFlowFormData, CashFlowId, CashFlowType},
            get_edit_cash_flow_page, update_cash_flow_endpoint,
        },
        test_utils::{
            assert_alert_message, assert_form_error_message, assert_form_input_with_value,
            assert_form_radio, assert_form_textarea, assert_hx_endpoint, assert_hx_redirect,
            assert_valid_html, create_test_user, get_shared_test_connection, must_get_form,
            parse_html_document, parse_html_fragment,
        },
    };

    fn get_service_and_users() -> (CashFlowService<SQLiteCashFlowStore>, User, User) {
        let connection = get_shared_test_connection();
        let (alice, bob) = {
            let connection = connection.lock().unwrap();
            (
                create_test_user(&connection, "alice"),
                create_test_user(&connection, "bob"),
            )
        };

        (
            CashFlowService::new(SQLiteCashFlowStore::new(connection)),
            alice,
            bob,
        )
    }

    fn create_salary(service: &CashFlowService<SQLiteCashFlowStore>, user: &User) -> CashFlow {
        let draft = CashFlowDraft::new(
            CashFlowType::CashIn,
            "Employer",
            "Salary",
            5000,
            Some("March pay"),
        )
        .unwrap();

        service.create(user.id, draft).unwrap()
    }

    fn rent_form(amount: i64) -> CashFlowFormData {
        CashFlowFormData {
            cash_flow_type: CashFlowType::CashOut,
            source: "Landlord".to_owned(),
            label: "Rent".to_owned(),
            amount,
            description: None,
        }
    }

    #[tokio::test]
    async fn edit_page_shows_current_values() {
        let (service, alice, _) = get_service_and_users();
        let cash_flow = create_salary(&service, &alice);

        let response =
            get_edit_cash_flow_page(Path(cash_flow.id), State(service), Extension(alice.id))
                .await
                .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_hx_endpoint(
            &form,
            &format!("/api/cash-flows/{}", cash_flow.id),
            "hx-put",
        );
        assert_form_radio(&form, "type", "CASH_IN", true);
        assert_form_input_with_value(&form, "label", "text", "Salary");
        assert_form_input_with_value(&form, "source", "text", "Employer");
        assert_form_input_with_value(&form, "amount", "number", "5000");
        assert_form_textarea(&form, "description", "March pay");
    }

    #[tokio::test]
    async fn edit_page_for_other_users_cash_flow_is_not_found() {
        let (service, alice, bob) = get_service_and_users();
        let cash_flow = create_salary(&service, &alice);

        let result =
            get_edit_cash_flow_page(Path(cash_flow.id), State(service), Extension(bob.id)).await;

        assert!(matches!(result, Err(Error::NotFound)));
    }

    #[tokio::test]
    async fn edit_page_for_missing_cash_flow_renders_404_page() {
        let (service, alice, _) = get_service_and_users();

        let response =
            get_edit_cash_flow_page(Path(CashFlowId::new()), State(service), Extension(alice.id))
                .await
                .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_redirects() {
        let (service, alice, _) = get_service_and_users();
        let cash_flow = create_salary(&service, &alice);

        let response = update_cash_flow_endpoint(
            Path(cash_flow.id),
            State(service.clone()),
            Extension(alice.id),
            Form(rent_form(450)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, "/cash-flows?flash=updated");
        let updated = service
            .get_by_id(alice.id, cash_flow.id)
            .unwrap()
            .expect("cash flow should still exist");
        assert_eq!(updated.cash_flow_type, CashFlowType::CashOut);
        assert_eq!(updated.source, "Landlord");
        assert_eq!(updated.label, "Rent");
        assert_eq!(updated.amount, Amount::new(450).unwrap());
        assert_eq!(updated.description, None);
        assert_eq!(updated.created_at, cash_flow.created_at);
    }

    #[tokio::test]
    async fn update_with_invalid_amount_renders_form_error_and_changes_nothing() {
        let (service, alice, _) = get_service_and_users();
        let cash_flow = create_salary(&service, &alice);

        let response = update_cash_flow_endpoint(
            Path(cash_flow.id),
            State(service.clone()),
            Extension(alice.id),
            Form(rent_form(0)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "label", "text", "Rent");
        assert_form_error_message(&form, &Error::InvalidAmount(0).to_string());
        assert_eq!(service.get_by_id(alice.id, cash_flow.id), Ok(Some(cash_flow)));
    }

    #[tokio::test]
    async fn update_other_users_cash_flow_returns_not_found_alert() {
        let (service, alice, bob) = get_service_and_users();
        let cash_flow = create_salary(&service, &alice);

        let response = update_cash_flow_endpoint(
            Path(cash_flow.id),
            State(service.clone()),
            Extension(bob.id),
            Form(rent_form(1)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_fragment(response).await;
        assert_alert_message(&html, "Cash flow not found");
        assert_eq!(service.get_by_id(alice.id, cash_flow.id), Ok(Some(cash_flow)));
    }

    #[tokio::test]
    async fn update_missing_cash_flow_returns_same_alert_as_other_users() {
        let (service, alice, _) = get_service_and_users();

        let response = update_cash_flow_endpoint(
            Path(CashFlowId::new()),
            State(service),
            Extension(alice.id),
            Form(rent_form(1)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_fragment(response).await;
        assert_alert_message(&html, "Cash flow not found");
    }
}
