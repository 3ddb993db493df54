use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Observation statistics attached to a transmitter. Null or absent counts are zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransmitterStat {
    #[serde(default)]
    pub total_count: Option<i64>,
    #[serde(default)]
    pub good_count: Option<i64>,
}

impl TransmitterStat {
    pub fn total(&self) -> i64 {
        self.total_count.unwrap_or(0)
    }

    pub fn good(&self) -> i64 {
        self.good_count.unwrap_or(0)
    }
}

/// One transmitter as listed by the remote API.
///
/// Only the fields the analysis and the report need are typed; everything
/// else is carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransmitterRecord {
    /// Grouping key; null or absent ids group together under `None`.
    #[serde(default)]
    pub satellite_norad: Option<i64>,
    #[serde(default)]
    pub satellite_name: Option<String>,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub stat: Option<TransmitterStat>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl TransmitterRecord {
    pub fn new(satellite_norad: i64, uuid: impl Into<String>) -> Self {
        Self {
            satellite_norad: Some(satellite_norad),
            satellite_name: None,
            uuid: uuid.into(),
            description: None,
            kind: None,
            status: None,
            stat: None,
            extra: HashMap::new(),
        }
    }

    pub fn without_norad(mut self) -> Self {
        self.satellite_norad = None;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.satellite_name = Some(name.into());
        self
    }

    pub fn with_stat(mut self, total_count: i64, good_count: i64) -> Self {
        self.stat = Some(TransmitterStat {
            total_count: Some(total_count),
            good_count: Some(good_count),
        });
        self
    }

    /// Share of good observations in percent, or 0.0 when nothing was observed.
    pub fn success_percentage(&self) -> f64 {
        let stat = self.stat.clone().unwrap_or_default();
        let total = stat.total();
        if total == 0 {
            return 0.0;
        }
        (stat.good() as f64 / total as f64) * 100.0
    }
}

/// The satellite owning the most transmitters.
#[derive(Debug, Clone, PartialEq)]
pub struct BusiestSatellite {
    pub norad_id: Option<i64>,
    pub satellite_name: Option<String>,
    pub transmitter_count: usize,
}

impl BusiestSatellite {
    pub fn none() -> Self {
        Self {
            norad_id: None,
            satellite_name: None,
            transmitter_count: 0,
        }
    }
}

pub const NO_BEST_PERCENTAGE: f64 = -1.0;

/// Best transmitter by observation success; `record` is None and the
/// percentage is [`NO_BEST_PERCENTAGE`] when there was nothing to rank.
#[derive(Debug, Clone, PartialEq)]
pub struct BestTransmitter {
    pub record: Option<TransmitterRecord>,
    pub success_percentage: f64,
}

impl BestTransmitter {
    pub fn none() -> Self {
        Self {
            record: None,
            success_percentage: NO_BEST_PERCENTAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    NoTransmitters,
    NoSatellite,
    Analyzed {
        busiest: BusiestSatellite,
        best: BestTransmitter,
    },
}
