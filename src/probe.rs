use crate::domain::CountryCodeList;
use crate::error::ProbeError;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

pub const COUNTRY_CODES_PATH: &str = "/api/landkoder";

#[derive(Clone, Debug)]
pub struct EndpointProbe {
    base_url: String,
    http_client: Client,
}

impl EndpointProbe {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http_client: Client::new(),
        }
    }

    pub fn url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            COUNTRY_CODES_PATH
        )
    }

    /// Request the complete country-code list in a single call.
    /// There is no retry, timeout or pagination.
    #[tracing::instrument(name = "Fetching country-code list", skip(self, token), fields(url = %self.url()))]
    pub async fn fetch_list(&self, token: &Secret<String>) -> Result<CountryCodeList, ProbeError> {
        let url = self.url();
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token.expose_secret())
            .send()
            .await
            .map_err(|source| {
                tracing::error!("Failed to reach the country-code endpoint: {:?}", source);
                ProbeError::Transport {
                    url: url.clone(),
                    source,
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%status, "Country-code endpoint rejected the request");
            return Err(ProbeError::HttpStatus { url, status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| {
                tracing::error!("Failed to read the country-code list: {:?}", source);
                ProbeError::Transport { url, source }
            })?;
        let list = CountryCodeList::parse(&body).map_err(|e| {
            tracing::error!("Failed to decode country-code list: {}", e);
            e
        })?;
        tracing::info!(count = list.len(), "Received country-code list");
        Ok(list)
    }
}

pub fn assert_count(list: &CountryCodeList, expected: usize) -> Result<(), ProbeError> {
    let actual = list.len();
    if actual == expected {
        Ok(())
    } else {
        Err(ProbeError::Assertion { expected, actual })
    }
}
