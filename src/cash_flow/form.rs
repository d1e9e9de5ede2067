//! The form shared by the create and edit cash flow pages.

use maud::{Markup, html};

use crate::{
    cash_flow::domain::{CashFlow, CashFlowFormData, CashFlowType},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, loading_spinner,
    },
};

/// How the form is submitted.
#[derive(Debug, Clone, Copy)]
pub(crate) enum FormMethod<'a> {
    /// `hx-post` to the given endpoint.
    Post(&'a str),
    /// `hx-put` to the given endpoint.
    Put(&'a str),
}

/// The values shown in the form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormValues {
    pub cash_flow_type: CashFlowType,
    pub source: String,
    pub label: String,
    pub amount: String,
    pub description: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            cash_flow_type: CashFlowType::CashOut,
            source: String::new(),
            label: String::new(),
            amount: String::new(),
            description: String::new(),
        }
    }
}

impl From<&CashFlow> for FormValues {
    fn from(cash_flow: &CashFlow) -> Self {
        Self {
            cash_flow_type: cash_flow.cash_flow_type,
            source: cash_flow.source.clone(),
            label: cash_flow.label.clone(),
            amount: cash_flow.amount.to_string(),
            description: cash_flow.description.clone().unwrap_or_default(),
        }
    }
}

impl From<&CashFlowFormData> for FormValues {
    fn from(form: &CashFlowFormData) -> Self {
        Self {
            cash_flow_type: form.cash_flow_type,
            source: form.source.clone(),
            label: form.label.clone(),
            amount: form.amount.to_string(),
            description: form.description.clone().unwrap_or_default(),
        }
    }
}

fn type_radio(value: CashFlowType, checked: CashFlowType) -> Markup {
    let id = format!("type-{}", value.as_str().to_lowercase());

    html! {
        div class="flex items-center gap-3"
        {
            input
                type="radio"
                name="type"
                id=(id)
                value=(value.as_str())
                checked[value == checked]
                required
                class=(FORM_RADIO_INPUT_STYLE);

            label for=(id) class=(FORM_RADIO_LABEL_STYLE) { (value.display_name()) }
        }
    }
}

/// Render the cash flow form.
///
/// `amount_error` is shown below the amount field. Unexpected errors are
/// swapped into the page's alert container.
pub(crate) fn cash_flow_form(
    method: FormMethod<'_>,
    values: &FormValues,
    amount_error: Option<&str>,
    submit_text: &str,
) -> Markup {
    let (hx_post, hx_put) = match method {
        FormMethod::Post(endpoint) => (Some(endpoint), None),
        FormMethod::Put(endpoint) => (None, Some(endpoint)),
    };

    html! {
        form
            hx-post=[hx_post]
            hx-put=[hx_put]
            hx-target="this"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            hx-disabled-elt="find button"
            hx-indicator="#indicator"
            class="w-full space-y-4 md:space-y-6"
        {
            fieldset class=(FORM_RADIO_GROUP_STYLE)
            {
                legend class=(FORM_LABEL_STYLE) { "Type" }

                (type_radio(CashFlowType::CashIn, values.cash_flow_type))
                (type_radio(CashFlowType::CashOut, values.cash_flow_type))
            }

            div
            {
                label for="label" class=(FORM_LABEL_STYLE) { "Label" }

                input
                    id="label"
                    type="text"
                    name="label"
                    placeholder="Groceries"
                    value=(values.label)
                    required
                    autofocus[amount_error.is_none()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="source" class=(FORM_LABEL_STYLE) { "Source" }

                input
                    id="source"
                    type="text"
                    name="source"
                    placeholder="Supermarket"
                    value=(values.source)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                input
                    id="amount"
                    type="number"
                    name="amount"
                    min="1"
                    step="1"
                    placeholder="0"
                    value=(values.amount)
                    required
                    autofocus[amount_error.is_some()]
                    class=(FORM_TEXT_INPUT_STYLE);

                @if let Some(error_message) = amount_error {
                    p class="text-red-500 text-base" { (error_message) }
                }
            }

            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description (optional)" }

                textarea
                    id="description"
                    name="description"
                    rows="3"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    (values.description)
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE)
            {
                span id="indicator" class="inline htmx-indicator" { (loading_spinner()) }
                " " (submit_text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use maud::Markup;
    use scraper::Html;

    use crate::{
        cash_flow::domain::CashFlowType,
        test_utils::{
            assert_form_error_message, assert_form_input, assert_form_input_with_value,
            assert_form_radio, assert_form_submit_button_with_text, assert_form_textarea,
            assert_hx_endpoint, assert_valid_html, must_get_form,
        },
    };

    use super::{FormMethod, FormValues, cash_flow_form};

    fn parse(markup: Markup) -> Html {
        let html = Html::parse_fragment(&markup.into_string());
        assert_valid_html(&html);
        html
    }

    #[test]
    fn empty_form_has_all_fields() {
        let html = parse(cash_flow_form(
            FormMethod::Post("/api/cash-flows"),
            &FormValues::default(),
            None,
            "Create",
        ));

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, "/api/cash-flows", "hx-post");
        assert_form_radio(&form, "type", "CASH_IN", false);
        assert_form_radio(&form, "type", "CASH_OUT", true);
        assert_form_input(&form, "label", "text");
        assert_form_input(&form, "source", "text");
        assert_form_input(&form, "amount", "number");
        assert_form_textarea(&form, "description", "");
        assert_form_submit_button_with_text(&form, "Create");
    }

    #[test]
    fn put_form_shows_values_and_error() {
        let values = FormValues {
            cash_flow_type: CashFlowType::CashIn,
            source: "Employer".to_owned(),
            label: "Salary".to_owned(),
            amount: "0".to_owned(),
            description: "March".to_owned(),
        };

        let html = parse(cash_flow_form(
            FormMethod::Put("/api/cash-flows/abc"),
            &values,
            Some("Amount must be greater than zero"),
            "Save",
        ));

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, "/api/cash-flows/abc", "hx-put");
        assert!(form.value().attr("hx-post").is_none());
        assert_form_radio(&form, "type", "CASH_IN", true);
        assert_form_radio(&form, "type", "CASH_OUT", false);
        assert_form_input_with_value(&form, "label", "text", "Salary");
        assert_form_input_with_value(&form, "source", "text", "Employer");
        assert_form_input_with_value(&form, "amount", "number", "0");
        assert_form_textarea(&form, "description", "March");
        assert_form_error_message(&form, "Amount must be greater than zero");
    }
}
