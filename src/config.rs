use std::env;

pub struct Config {
    pub api_url: String,
    pub api_token: String,
    pub scope: String,
    pub page_size: u32,
    pub non_kiln_total_pages: u32,
    pub output_csv: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("REWARDS_API_URL").expect("REWARDS_API_URL must be set"),
            api_token: env::var("REWARDS_API_TOKEN").expect("REWARDS_API_TOKEN must be set"),
            scope: env::var("SCOPE").unwrap_or_else(|_| "kiln".to_string()),
            page_size: env::var("PAGE_SIZE")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap(),
            non_kiln_total_pages: env::var("NON_KILN_TOTAL_PAGES")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap(),
            output_csv: env::var("OUTPUT_CSV")
                .unwrap_or_else(|_| "validator_rewards.csv".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap(),
        }
    }
}
