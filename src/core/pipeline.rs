use crate::core::analyzer;
use crate::core::fetcher::TransmitterFetcher;
use crate::core::report;
use crate::core::{AnalysisOutcome, ConfigProvider, Pipeline, TransmitterRecord};
use crate::utils::error::Result;

pub struct TransmitterPipeline<C: ConfigProvider> {
    config: C,
    fetcher: TransmitterFetcher,
}

impl<C: ConfigProvider> TransmitterPipeline<C> {
    pub fn new(config: C) -> Self {
        let fetcher = TransmitterFetcher::new(config.api_endpoint());
        Self { config, fetcher }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for TransmitterPipeline<C> {
    async fn extract(&self) -> Result<Vec<TransmitterRecord>> {
        tracing::debug!("Fetching transmitters from: {}", self.fetcher.base_url());
        self.fetcher.fetch_all().await
    }

    async fn transform(&self, data: Vec<TransmitterRecord>) -> Result<AnalysisOutcome> {
        Ok(analyzer::analyze(&data))
    }

    async fn load(&self, outcome: AnalysisOutcome) -> Result<String> {
        Ok(report::render(&outcome))
    }
}
