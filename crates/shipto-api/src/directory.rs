// Customer directory HTTP client
//
// Two read-only endpoints: the full customer list and a per-customer
// detail lookup keyed by identifier. Both are plain JSON documents with no
// envelope.

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::{CustomerDetailRecord, CustomerRecord};
use crate::response;
use crate::transport::TransportConfig;

/// Raw HTTP client for the customer directory and detail endpoints.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: reqwest::Client,
    directory_url: Url,
    detail_url: Url,
    timeout: Option<Duration>,
}

impl DirectoryClient {
    /// Create a new directory client from a `TransportConfig`.
    ///
    /// `directory_url` is fetched as-is; `detail_url` is the base that a
    /// customer identifier is appended to as one path segment.
    pub fn new(
        directory_url: Url,
        detail_url: Url,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            directory_url,
            detail_url,
            timeout: Some(transport.timeout),
        })
    }

    /// Create a directory client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, directory_url: Url, detail_url: Url) -> Self {
        Self {
            http,
            directory_url,
            detail_url,
            timeout: None,
        }
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `{detail}/{id}`, with `id` percent-encoded as a single segment.
    pub(crate) fn customer_url(&self, id: &str) -> Result<Url, Error> {
        let mut url = self.detail_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::CannotBeABase(self.detail_url.to_string()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// Fetch the full customer list.
    ///
    /// `GET {directory}`
    pub async fn list_customers(&self) -> Result<Vec<CustomerRecord>, Error> {
        let url = self.directory_url.clone();
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::from_send(e, self.timeout))?;

        let customers: Vec<CustomerRecord> = response::json(resp).await?;
        debug!(count = customers.len(), "customer directory fetched");
        Ok(customers)
    }

    /// Look up a customer's contact details.
    ///
    /// `GET {detail}/{id}`
    pub async fn customer_detail(&self, id: &str) -> Result<CustomerDetailRecord, Error> {
        let url = self.customer_url(id)?;
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::from_send(e, self.timeout))?;

        response::json(resp).await
    }
}
