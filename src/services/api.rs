//! Trip API Client
//!
//! Read-only access to the two endpoints of the remote trip service:
//! the full collection (`GET {base}/`) and the sorted, paginated listing
//! (`GET {base}/sorted`). Both wrap their payload in the same envelope.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::connection::ApiConfig;
use crate::domain::query::ListingQuery;
use crate::domain::trip::{Trip, TripPage};
use crate::error::{Error, Result};

/// Fallback message when the API reports failure without one
const GENERIC_FAILURE: &str = "Error fetching data";

/// Source of trip records
///
/// Implementations must be shareable across tokio tasks; the returned futures
/// are spawned on the dashboard runtime.
pub trait TripApi: Send + Sync + 'static {
    /// Fetch the whole collection in one request
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<Trip>>> + Send;

    /// Fetch one page of the sorted listing
    fn fetch_sorted(&self, query: &ListingQuery) -> impl Future<Output = Result<TripPage>> + Send;
}

/// Response envelope shared by both endpoints
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    total_records: Option<u64>,
    message: Option<String>,
}

impl<T> Envelope<T> {
    /// Turn `success: false` into an error carrying the server's message
    fn into_payload(self) -> Result<(Option<T>, Option<u64>)> {
        if !self.success {
            return Err(Error::Api {
                message: self
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            });
        }
        Ok((self.data, self.total_records))
    }
}

/// HTTP implementation backed by reqwest
#[derive(Clone, Debug)]
pub struct HttpTripApi {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl HttpTripApi {
    /// Build a client for the configured base URL
    pub fn new(config: &ApiConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(Error::Invalid {
                message: "API base URL is empty".to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    fn sorted_url(&self) -> String {
        format!("{}/sorted", self.base_url)
    }

    async fn get_envelope<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Envelope<T>> {
        tracing::debug!("GET {} {:?}", url, query);

        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        // Failure envelopes may come with a 4xx/5xx; prefer their message.
        match serde_json::from_slice::<Envelope<T>>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

impl TripApi for HttpTripApi {
    async fn fetch_all(&self) -> Result<Vec<Trip>> {
        let url = self.collection_url();
        let (data, _) = self.get_envelope::<Vec<Trip>>(&url, &[]).await?.into_payload()?;
        let trips = data.unwrap_or_default();
        tracing::debug!("Fetched {} trips from {}", trips.len(), url);
        Ok(trips)
    }

    async fn fetch_sorted(&self, query: &ListingQuery) -> Result<TripPage> {
        let url = self.sorted_url();
        let pairs = query.query_pairs();
        let (data, total) = self
            .get_envelope::<Vec<Trip>>(&url, &pairs)
            .await?
            .into_payload()?;

        let trips = data.unwrap_or_default();
        let total_records = total.unwrap_or(trips.len() as u64);
        Ok(TripPage {
            trips,
            total_records,
        })
    }
}
