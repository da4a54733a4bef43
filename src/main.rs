use dotenv::dotenv;
use log::info;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use std::time::Duration;

mod config;
mod error;
mod models;
mod repositories;
mod services;

use crate::config::Config;
use crate::models::PageQuery;
use crate::repositories::csv_repository;
use crate::services::{apy_analyzer, rewards_api};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    info!("Starting validator rewards indexer");
    let config = Config::from_env();

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;
    let headers = auth_headers(&config.api_token)?;

    let query = PageQuery {
        scope: config.scope.clone(),
        current_page: 1,
        page_size: config.page_size,
    };

    info!("Fetching validator pages from {}", config.api_url);
    let validators =
        rewards_api::fetch_all_pages(&client, &config.api_url, &query, &headers).await?;
    info!("Fetched {} validator records", validators.len());

    let rows = apy_analyzer::calculate_apys(&validators);
    csv_repository::save_apy_rows(&config.output_csv, &rows)?;

    let summary = apy_analyzer::calculate_overall_apys(&rows);
    info!(
        "Overall APYs - gross: {:.4}%, consensus: {:.4}%, execution: {:.4}%",
        summary.avg_gross_apy, summary.avg_cl_apy, summary.avg_el_apy
    );
    apy_analyzer::get_max_apy_validators(&rows, "all validators");

    info!(
        "Fetching up to {} pages of non-kiln validators",
        config.non_kiln_total_pages
    );
    let non_kiln = rewards_api::fetch_all_non_kiln_validators(
        &client,
        &config.api_url,
        &query,
        &headers,
        config.non_kiln_total_pages,
    )
    .await;

    let non_kiln_rows = apy_analyzer::calculate_apys(&non_kiln);
    apy_analyzer::get_max_apy_validators(&non_kiln_rows, "non-kiln validators");

    info!("Indexing complete");
    Ok(())
}

fn auth_headers(api_token: &str) -> Result<HeaderMap, Box<dyn std::error::Error>> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_token))?,
    );
    Ok(headers)
}
