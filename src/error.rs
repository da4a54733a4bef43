use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{status} error: failed to fetch data from {url}")]
    Request {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("empty result from {url}: pagination reported zero total pages or zero page size")]
    EmptyResult { url: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
