// src/core/net.rs
//! Page fetching.
//!
//! One blocking GET per call. No retries, no cache, transport defaults for
//! timeouts and redirects. Any non-success status is a failure; a success
//! body is parsed into a `scraper::Html` document.

use std::error::Error as StdError;

use reqwest::blocking::Client;
use scraper::Html;
use thiserror::Error;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: Url, status: u16 },
}

impl FetchError {
    pub fn url(&self) -> &Url {
        match self {
            FetchError::Transport { url, .. } | FetchError::Status { url, .. } => url,
        }
    }
}

/// Anything that can turn a URL into a parsed document.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<Html, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &Url) -> Result<Html, FetchError> {
        (**self).fetch(url)
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Html, FetchError> {
        debug!(%url, "GET");
        let transport = |e: reqwest::Error| FetchError::Transport { url: url.clone(), source: Box::new(e) };

        let resp = self.client.get(url.clone()).send().map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.clone(), status: status.as_u16() });
        }
        let body = resp.text().map_err(transport)?;
        debug!(%url, bytes = body.len(), "fetched");
        Ok(Html::parse_document(&body))
    }
}
