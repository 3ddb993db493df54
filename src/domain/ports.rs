use crate::domain::model::{AnalysisOutcome, TransmitterRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<TransmitterRecord>>;
    async fn transform(&self, data: Vec<TransmitterRecord>) -> Result<AnalysisOutcome>;
    async fn load(&self, outcome: AnalysisOutcome) -> Result<String>;
}
