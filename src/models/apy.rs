use chrono::{DateTime, Utc};
use serde::Serialize;

/// One output row: the validator's scalar columns plus the derived
/// ETH-denominated amounts and the consensus/execution APY split.
#[derive(Debug, Clone, Serialize)]
pub struct ValidatorApyRow {
    pub validator_address: String,
    pub validator_index: Option<u64>,
    pub state: String,
    pub is_kiln: bool,
    pub effective_balance_eth: f64,
    pub consensus_rewards_eth: f64,
    pub execution_rewards_eth: f64,
    pub total_rewards_eth: f64,
    pub gross_apy: f64,
    pub cl_apy: f64,
    pub el_apy: f64,
    pub activated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApySummary {
    pub avg_gross_apy: f64,
    pub avg_cl_apy: f64,
    pub avg_el_apy: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MaxApyReport {
    pub gross: ValidatorApyRow,
    pub cl: ValidatorApyRow,
    pub el: ValidatorApyRow,
}
