use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, instrument};

use crate::core::config::ExchangeServiceConfig;
use crate::core::currency::ExchangeQuery;

const USER_AGENT: &str = concat!("xchg/", env!("CARGO_PKG_VERSION"));

// ExchangeServiceProvider implementation for ExchangeQuery
pub struct ExchangeServiceProvider {
    base_url: String,
    path: String,
}

impl ExchangeServiceProvider {
    pub fn new(base_url: &str, path: &str) -> Self {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        ExchangeServiceProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            path,
        }
    }

    pub fn from_config(config: &ExchangeServiceConfig) -> Self {
        Self::new(&config.base_url, &config.path)
    }

    fn query_url(&self, old: &str, new: &str, amt: f64) -> Result<Url> {
        let endpoint = format!("{}{}", self.base_url, self.path);
        // `{:?}` keeps the fractional part, so 4.0 is sent as "4.0"
        let amount = format!("{amt:?}");
        Url::parse_with_params(
            &endpoint,
            &[("old", old), ("new", new), ("amt", amount.as_str())],
        )
        .with_context(|| format!("Invalid exchange service URL: {endpoint}"))
    }
}

#[async_trait]
impl ExchangeQuery for ExchangeServiceProvider {
    #[instrument(name = "ExchangeQuery", skip(self), fields(pair = %format!("{old}->{new}")))]
    async fn query_website(&self, old: &str, new: &str, amt: f64) -> Result<String> {
        let url = self.query_url(old, new, amt)?;
        debug!("Requesting conversion from {}", url);

        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                anyhow!(
                    "Request error: {} for currency pair: {}->{} URL: {}",
                    e,
                    old,
                    new,
                    url
                )
            })?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for currency pair: {}->{}",
                response.status(),
                old,
                new
            ));
        }

        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to get response text for {old}->{new}"))?;
        debug!(response = %text, "Received exchange response");

        Ok(text)
    }
}
