use crate::domain::model::TransmitterRecord;
use crate::utils::error::{ReportError, Result};
use reqwest::{Client, StatusCode};

pub const DEFAULT_API_ENDPOINT: &str = "https://sonik.space/api/transmitters/";

/// What a single listing page told us.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    Records(Vec<TransmitterRecord>),
    /// Empty page or 404: there is nothing past this point.
    Exhausted,
}

/// Walks the paginated transmitter listing from page 1 until it runs dry.
pub struct TransmitterFetcher {
    client: Client,
    base_url: String,
}

impl TransmitterFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_page(&self, page: u32) -> Result<PageOutcome> {
        tracing::debug!("Requesting page {} from {}", page, self.base_url);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("page", page)])
            .send()
            .await
            .map_err(|source| ReportError::Transport { page, source })?;

        let status = response.status();
        tracing::debug!("Page {} response status: {}", page, status);

        if status == StatusCode::NOT_FOUND {
            return Ok(PageOutcome::Exhausted);
        }
        if !status.is_success() {
            return Err(ReportError::HttpStatus { page, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ReportError::Transport { page, source })?;
        let records: Vec<TransmitterRecord> = serde_json::from_slice(&body)
            .map_err(|source| ReportError::MalformedPage { page, source })?;

        if records.is_empty() {
            Ok(PageOutcome::Exhausted)
        } else {
            Ok(PageOutcome::Records(records))
        }
    }

    /// Fetches every page in order. Any failure other than a 404 aborts the
    /// whole fetch and discards what was collected so far.
    pub async fn fetch_all(&self) -> Result<Vec<TransmitterRecord>> {
        let mut transmitters = Vec::new();
        let mut page = 1;

        loop {
            match self.fetch_page(page).await? {
                PageOutcome::Records(records) => {
                    tracing::debug!("Page {} returned {} transmitters", page, records.len());
                    transmitters.extend(records);
                    page += 1;
                }
                PageOutcome::Exhausted => {
                    tracing::debug!("Page {} is past the end of the listing", page);
                    break;
                }
            }
        }

        tracing::info!(
            "Fetched {} transmitters across {} pages",
            transmitters.len(),
            page - 1
        );
        Ok(transmitters)
    }
}
