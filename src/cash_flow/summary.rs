//! Totals shown above the list of cash flows.

use crate::cash_flow::domain::{CashFlow, CashFlowType};

/// The totals of a list of cash flows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CashFlowSummary {
    /// The sum of all cash in.
    pub total_in: i64,
    /// The sum of all cash out.
    pub total_out: i64,
    /// `total_in - total_out`.
    pub balance: i64,
}

impl CashFlowSummary {
    /// Sum `cash_flows`. The order of `cash_flows` does not affect the result.
    pub fn from_cash_flows(cash_flows: &[CashFlow]) -> Self {
        let (total_in, total_out) =
            cash_flows
                .iter()
                .fold((0_i64, 0_i64), |(total_in, total_out), cash_flow| {
                    let amount = cash_flow.amount.as_i64();

                    match cash_flow.cash_flow_type {
                        CashFlowType::CashIn => (total_in + amount, total_out),
                        CashFlowType::CashOut => (total_in, total_out + amount),
                    }
                });

        Self {
            total_in,
            total_out,
            balance: total_in - total_out,
        }
    }
}
