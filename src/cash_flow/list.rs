//! The page listing the logged in user's cash flows with their totals.

use axum::{
    Extension,
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::UtcOffset;

use crate::{
    AppState, Error,
    alert::Alert,
    auth::UserID,
    cash_flow::{
        CashFlowService, CashFlowSummary, SQLiteCashFlowStore,
        domain::{CashFlow, CashFlowType},
    },
    endpoints::{self, format_endpoint},
    html::{
        CASH_IN_BADGE_STYLE, CASH_OUT_BADGE_STYLE, FORM_TEXT_INPUT_STYLE,
        PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        alert_container, base, edit_delete_action_links, format_amount, link,
    },
    navigation::NavBar,
    timezone::get_local_offset_or_error,
};

const INLINE_BUTTON_STYLE: &str = "px-4 py-2 bg-blue-500 dark:bg-blue-600 \
    hover:bg-blue-600 hover:dark:bg-blue-700 text-white rounded";

/// The outcome of a change that redirected back to the list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flash {
    Created,
    Updated,
    Deleted,
}

impl Flash {
    fn as_str(&self) -> &'static str {
        match self {
            Flash::Created => "created",
            Flash::Updated => "updated",
            Flash::Deleted => "deleted",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "created" => Some(Flash::Created),
            "updated" => Some(Flash::Updated),
            "deleted" => Some(Flash::Deleted),
            _ => None,
        }
    }

    fn into_alert(self) -> Alert {
        let message = match self {
            Flash::Created => "Cash flow created",
            Flash::Updated => "Cash flow updated",
            Flash::Deleted => "Cash flow deleted",
        };

        Alert::Success {
            message: message.to_owned(),
            details: String::new(),
        }
    }
}

/// The URL of the list page that confirms `flash` when loaded.
pub(crate) fn cash_flows_redirect_url(flash: Flash) -> String {
    format!("{}?flash={}", endpoints::CASH_FLOWS_VIEW, flash.as_str())
}

/// The query parameters for the cash flows page.
#[derive(Debug, Default, Deserialize)]
pub struct CashFlowsQuery {
    /// Only show cash flows that contain this text.
    pub search: Option<String>,
    /// Set after a change redirects back to this page.
    pub flash: Option<String>,
}

/// The state needed for the cash flows page.
#[derive(Debug, Clone)]
pub struct CashFlowsPageState {
    pub service: CashFlowService<SQLiteCashFlowStore>,
    pub local_timezone: String,
}

impl FromRef<AppState> for CashFlowsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            service: state.cash_flows.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Render the logged in user's cash flows, newest first, with the totals of
/// the listed cash flows.
pub async fn get_cash_flows_page(
    State(state): State<CashFlowsPageState>,
    Extension(user_id): Extension<UserID>,
    Query(query): Query<CashFlowsQuery>,
) -> Result<Response, Error> {
    let local_offset = get_local_offset_or_error(&state.local_timezone)?;
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|search| !search.is_empty());

    let cash_flows = state
        .service
        .list(user_id, search)
        .inspect_err(|error| {
            tracing::error!("Could not list cash flows for user {user_id}: {error}")
        })?;
    let summary = CashFlowSummary::from_cash_flows(&cash_flows);
    let flash = query.flash.as_deref().and_then(Flash::parse);

    Ok(cash_flows_view(&cash_flows, summary, search, flash, local_offset).into_response())
}

fn summary_card(id: &str, title: &str, amount: i64, amount_style: &str) -> Markup {
    html! {
        div class="flex-1 p-4 rounded-lg shadow bg-white dark:bg-gray-800"
        {
            p class="text-sm text-gray-500 dark:text-gray-400" { (title) }
            p id=(id) class=(amount_style) { (format_amount(amount)) }
        }
    }
}

fn summary_view(summary: CashFlowSummary) -> Markup {
    let balance_style = if summary.balance < 0 {
        "text-2xl font-bold text-red-600 dark:text-red-400"
    } else {
        "text-2xl font-bold"
    };

    html! {
        section class="flex flex-col sm:flex-row gap-4 w-full mb-6" aria-label="Summary"
        {
            (summary_card("total-in", "Total in", summary.total_in, "text-2xl font-bold text-green-600 dark:text-green-400"))
            (summary_card("total-out", "Total out", summary.total_out, "text-2xl font-bold text-red-600 dark:text-red-400"))
            (summary_card("balance", "Balance", summary.balance, balance_style))
        }
    }
}

fn search_form(search: Option<&str>) -> Markup {
    html! {
        form method="get" action=(endpoints::CASH_FLOWS_VIEW) role="search" class="flex gap-2 w-full mb-6"
        {
            label for="search" class="sr-only" { "Search" }

            input
                id="search"
                type="search"
                name="search"
                placeholder="Search label, source or description"
                value=[search]
                class=(FORM_TEXT_INPUT_STYLE);

            button type="submit" class=(INLINE_BUTTON_STYLE) { "Search" }
        }
    }
}

fn type_badge(cash_flow_type: CashFlowType) -> Markup {
    let style = match cash_flow_type {
        CashFlowType::CashIn => CASH_IN_BADGE_STYLE,
        CashFlowType::CashOut => CASH_OUT_BADGE_STYLE,
    };

    html! { span class=(style) { (cash_flow_type.display_name()) } }
}

fn action_links(cash_flow: &CashFlow) -> Markup {
    edit_delete_action_links(
        &format_endpoint(endpoints::EDIT_CASH_FLOW_VIEW, cash_flow.id),
        &format_endpoint(endpoints::CASH_FLOW, cash_flow.id),
        &format!(
            "Are you sure you want to delete \"{}\"? This cannot be undone.",
            cash_flow.label
        ),
    )
}

fn cash_flow_row(cash_flow: &CashFlow, local_offset: UtcOffset) -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE) data-cash-flow-id=(cash_flow.id)
        {
            td class=(TABLE_CELL_STYLE) { (cash_flow.created_at.to_offset(local_offset).date()) }
            td class=(TABLE_CELL_STYLE) { (type_badge(cash_flow.cash_flow_type)) }
            th scope="row" class="px-6 py-4 font-medium text-gray-900 dark:text-white" { (cash_flow.label) }
            td class=(TABLE_CELL_STYLE) { (cash_flow.source) }
            td class="px-6 py-4 text-right" { (format_amount(cash_flow.amount.as_i64())) }
            td class=(TABLE_CELL_STYLE) { (cash_flow.description.as_deref().unwrap_or_default()) }
            td class=(TABLE_CELL_STYLE)
            {
                div class="flex gap-4" { (action_links(cash_flow)) }
            }
        }
    }
}

fn cash_flow_card(cash_flow: &CashFlow, local_offset: UtcOffset) -> Markup {
    html! {
        li class="p-4 rounded-lg shadow bg-white dark:bg-gray-800"
        {
            div class="flex justify-between items-start"
            {
                div
                {
                    p class="font-medium" { (cash_flow.label) }
                    p class="text-sm text-gray-500 dark:text-gray-400"
                    {
                        (cash_flow.source) " · " (cash_flow.created_at.to_offset(local_offset).date())
                    }
                }

                div class="text-right"
                {
                    p class="font-semibold" { (format_amount(cash_flow.amount.as_i64())) }
                    (type_badge(cash_flow.cash_flow_type))
                }
            }

            @if let Some(description) = &cash_flow.description {
                p class="mt-2 text-sm" { (description) }
            }

            div class="flex gap-4 mt-2" { (action_links(cash_flow)) }
        }
    }
}

fn empty_state(search: Option<&str>) -> Markup {
    html! {
        div id="empty-state" class="w-full p-6 text-center rounded-lg bg-white dark:bg-gray-800"
        {
            @if let Some(search) = search {
                p { "No cash flows match \"" (search) "\"." }
                p { (link(endpoints::CASH_FLOWS_VIEW, "Clear search")) }
            } @else {
                p { "You have not recorded any cash flows yet." }
                p { (link(endpoints::NEW_CASH_FLOW_VIEW, "Record your first cash flow")) }
            }
        }
    }
}

fn cash_flows_view(
    cash_flows: &[CashFlow],
    summary: CashFlowSummary,
    search: Option<&str>,
    flash: Option<Flash>,
    local_offset: UtcOffset,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::CASH_FLOWS_VIEW).into_html();
    let initial_alert = flash.map(|flash| flash.into_alert().into_html());

    let content = html! {
        (nav_bar)
        (alert_container(initial_alert))

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-5xl"
            {
                div class="flex justify-between items-center mb-4"
                {
                    h1 class="text-xl font-bold" { "Cash Flows" }
                    a href=(endpoints::NEW_CASH_FLOW_VIEW) class=(INLINE_BUTTON_STYLE) { "New Cash Flow" }
                }

                (summary_view(summary))
                (search_form(search))

                @if cash_flows.is_empty() {
                    (empty_state(search))
                } @else {
                    div class="hidden lg:block relative overflow-x-auto shadow-md rounded-lg"
                    {
                        table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                        {
                            thead class=(TABLE_HEADER_STYLE)
                            {
                                tr
                                {
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Type" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Label" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Source" }
                                    th scope="col" class="px-6 py-4 text-right" { "Amount" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                                }
                            }

                            tbody
                            {
                                @for cash_flow in cash_flows {
                                    (cash_flow_row(cash_flow, local_offset))
                                }
                            }
                        }
                    }

                    ul id="cash-flow-cards" class="lg:hidden flex flex-col gap-4"
                    {
                        @for cash_flow in cash_flows {
                            (cash_flow_card(cash_flow, local_offset))
                        }
                    }
                }
            }
        }
    };

    base("Cash Flows", &content)
}
