pub mod analyzer;
pub mod engine;
pub mod fetcher;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{
    AnalysisOutcome, BestTransmitter, BusiestSatellite, TransmitterRecord, TransmitterStat,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
