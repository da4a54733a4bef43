use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn zero_amount() -> String {
    "0".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorRecord {
    pub validator_address: String,
    #[serde(default)]
    pub validator_index: Option<u64>,
    #[serde(default)]
    pub state: String,
    #[serde(default = "zero_amount")]
    pub balance: String,
    #[serde(default = "zero_amount")]
    pub effective_balance: String,
    #[serde(default = "zero_amount")]
    pub consensus_rewards: String,
    #[serde(default = "zero_amount")]
    pub execution_rewards: String,
    #[serde(default)]
    pub gross_apy: f64,
    #[serde(default)]
    pub is_kiln: bool,
    #[serde(default)]
    pub activated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub eigenlayer: Option<RestakingStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestakingStatus {
    #[serde(default)]
    pub is_restaked: bool,
    #[serde(default)]
    pub points: Option<f64>,
}
