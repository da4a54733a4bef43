use log::{error, info};
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};

use crate::error::FetchError;
use crate::models::{PageQuery, PageResponse, ValidatorRecord};

pub async fn fetch_page(
    client: &Client,
    api_url: &str,
    query: &PageQuery,
    headers: &HeaderMap,
) -> Result<PageResponse, FetchError> {
    let response = client
        .get(api_url)
        .query(query)
        .headers(headers.clone())
        .send()
        .await?;

    if response.status() != StatusCode::OK {
        return Err(FetchError::Request {
            status: response.status(),
            url: api_url.to_string(),
        });
    }

    Ok(response.json::<PageResponse>().await?)
}

/// Fetch every page of the validator cohort selected by `query.scope`.
///
/// Page 1 discovers the pagination bounds; a first-page failure or a zero
/// total-pages/page-size report is fatal. From page 2 on, a failed request
/// logs and returns the partial table accumulated so far, and a page shorter
/// than the requested page size ends the run early.
pub async fn fetch_all_pages(
    client: &Client,
    api_url: &str,
    query: &PageQuery,
    headers: &HeaderMap,
) -> Result<Vec<ValidatorRecord>, FetchError> {
    let first = fetch_page(client, api_url, query, headers).await?;

    let total_pages = first.pagination.total_pages;
    if total_pages == 0 || first.pagination.page_size == 0 {
        return Err(FetchError::EmptyResult {
            url: api_url.to_string(),
        });
    }

    let mut validators = first.data;
    info!(
        "Fetched page 1/{} ({} records)",
        total_pages,
        validators.len()
    );

    for page in 2..=total_pages {
        let page_query = PageQuery {
            current_page: page,
            ..query.clone()
        };
        match fetch_page(client, api_url, &page_query, headers).await {
            Ok(response) => {
                let fetched = response.data.len();
                validators.extend(response.data);
                info!("Fetched page {}/{} ({} records)", page, total_pages, fetched);
                // A short page means the server ran out of data before the
                // nominal page count.
                if fetched < query.page_size as usize {
                    break;
                }
            }
            Err(e) => {
                // Mid-run failures degrade to a partial table, not an error.
                error!("Stopping pagination at page {}: {}", page, e);
                break;
            }
        }
    }

    Ok(validators)
}

/// Fetch `total_pages` pages of the cohort and keep only third-party
/// validators (`is_kiln == false`), in fetch order. The page bound comes from
/// the caller; failures degrade to whatever was accumulated.
pub async fn fetch_all_non_kiln_validators(
    client: &Client,
    api_url: &str,
    query: &PageQuery,
    headers: &HeaderMap,
    total_pages: u32,
) -> Vec<ValidatorRecord> {
    let mut validators = Vec::new();

    for page in 1..=total_pages {
        let page_query = PageQuery {
            current_page: page,
            ..query.clone()
        };
        match fetch_page(client, api_url, &page_query, headers).await {
            Ok(response) => {
                let fetched = response.data.len();
                validators.extend(response.data);
                info!(
                    "Fetched page {}/{} ({} records, {} accumulated)",
                    page,
                    total_pages,
                    fetched,
                    validators.len()
                );
                if fetched < query.page_size as usize {
                    break;
                }
            }
            Err(e) => {
                error!("Stopping pagination at page {}: {}", page, e);
                break;
            }
        }
    }

    let non_kiln: Vec<ValidatorRecord> =
        validators.into_iter().filter(|v| !v.is_kiln).collect();
    info!("Kept {} non-kiln validators", non_kiln.len());
    non_kiln
}
