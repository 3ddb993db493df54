use crate::core::{AnalysisOutcome, Pipeline};
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs fetch, analysis and rendering in sequence and returns the report text.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Loading transmitters, please wait...");
        let transmitters = self.pipeline.extract().await?;
        tracing::info!("Fetched {} transmitters, analysing", transmitters.len());

        let outcome = self.pipeline.transform(transmitters).await?;
        match &outcome {
            AnalysisOutcome::NoTransmitters => tracing::warn!("No transmitter data received"),
            AnalysisOutcome::NoSatellite => tracing::warn!("Could not determine a satellite"),
            AnalysisOutcome::Analyzed { busiest, best } => tracing::info!(
                "Busiest satellite {:?} has {} transmitters, best success rate {:.2}%",
                busiest.norad_id,
                busiest.transmitter_count,
                best.success_percentage
            ),
        }

        self.pipeline.load(outcome).await
    }
}
