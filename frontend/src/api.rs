//! Client for the sample API.
//!
//! All calls are plain GETs. Failures are returned as [`ApiError`] and the
//! caller decides how to surface them; nothing here retries.

use common::model::affiliation::Affiliation;
use common::model::sample::{samples_from_value, Sample};
use common::model::species::SpeciesCount;
use common::requests::{ApiEndpoints, SampleFilter};
use futures_util::future::join;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        source: gloo_net::Error,
    },
    #[error("request failed: {url} ({status})")]
    Status { url: String, status: u16 },
    #[error("invalid response from {url}: {source}")]
    Decode {
        url: String,
        source: gloo_net::Error,
    },
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|source| ApiError::Network {
            url: url.to_string(),
            source,
        })?;

    if !response.ok() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response.json::<T>().await.map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    endpoints: ApiEndpoints,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        Self {
            endpoints: ApiEndpoints::new(base),
        }
    }

    pub fn base(&self) -> &str {
        self.endpoints.base()
    }

    pub async fn species(&self) -> Result<Vec<SpeciesCount>, ApiError> {
        get_json(&self.endpoints.species()).await
    }

    pub async fn affiliations(&self) -> Result<Vec<Affiliation>, ApiError> {
        get_json(&self.endpoints.affiliations()).await
    }

    /// Both dropdown lists, requested concurrently. Fails if either fails.
    pub async fn filter_lists(&self) -> Result<(Vec<SpeciesCount>, Vec<Affiliation>), ApiError> {
        let (species, affiliations) = join(self.species(), self.affiliations()).await;
        Ok((species?, affiliations?))
    }

    pub async fn samples(&self, filter: &SampleFilter) -> Result<Vec<Sample>, ApiError> {
        let body: serde_json::Value = get_json(&self.endpoints.samples(filter)).await?;
        Ok(samples_from_value(body))
    }
}
