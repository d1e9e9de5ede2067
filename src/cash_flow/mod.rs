//! Recording money coming in and going out.
//!
//! Every cash flow is owned by one user and can only be seen or changed by
//! that user.

mod create;
mod delete;
mod domain;
mod edit;
mod form;
mod list;
mod service;
mod store;
mod summary;

pub use create::{create_cash_flow_endpoint, get_new_cash_flow_page};
pub use delete::delete_cash_flow_endpoint;
pub use domain::{Amount, CashFlow, CashFlowDraft, CashFlowId, CashFlowType};
pub use edit::{get_edit_cash_flow_page, update_cash_flow_endpoint};
pub use list::get_cash_flows_page;
pub use service::CashFlowService;
pub use store::{CashFlowStore, SQLiteCashFlowStore, create_cash_flow_table};
pub use summary::CashFlowSummary;
