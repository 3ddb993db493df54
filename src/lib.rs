pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{
    analyzer::{analyze, find_best, find_busiest, find_busiest_with, NamePolicy},
    engine::ReportEngine,
    fetcher::{TransmitterFetcher, DEFAULT_API_ENDPOINT},
    pipeline::TransmitterPipeline,
};
pub use domain::model::{
    AnalysisOutcome, BestTransmitter, BusiestSatellite, TransmitterRecord, TransmitterStat,
};
pub use domain::ports::{ConfigProvider, Pipeline};
pub use utils::error::{ReportError, Result};
