use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use reqwest::redirect;
use tracing::{debug, warn};
use url::Url;

use crate::config::FetchConfig;
use crate::error::ExtractError;

/// Supplies the raw HTML of a product page.
pub trait PageFetcher {
    fn fetch_html(&self, url: &Url) -> Result<String, ExtractError>;
}

/// Fetches pages over HTTP with browser-like headers. No retries.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, ExtractError> {
        let max_redirects = config.max_redirects;
        let redirect_policy = redirect::Policy::custom(move |attempt| {
            if attempt.previous().len() > max_redirects {
                attempt.error(format!("Too many redirects (>{})", max_redirects))
            } else {
                attempt.follow()
            }
        });

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)
                .map_err(|e| ExtractError::Network(e.to_string()))?,
        );
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert("upgrade-insecure-requests", HeaderValue::from_static("1"));

        let client = Client::builder()
            .redirect(redirect_policy)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(HttpFetcher { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_html(&self, url: &Url) -> Result<String, ExtractError> {
        debug!("fetching {}", url);
        let resp = self.client.get(url.as_str()).send()?;
        let status = resp.status();
        if !status.is_success() {
            warn!("{} answered HTTP {}", url, status.as_u16());
            return Err(ExtractError::Http {
                status: status.as_u16(),
            });
        }
        Ok(resp.text()?)
    }
}
