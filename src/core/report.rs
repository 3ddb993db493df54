use crate::domain::model::{AnalysisOutcome, BestTransmitter, BusiestSatellite};

const RULE: &str = "====================================";

fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn busiest_section(busiest: &BusiestSatellite) -> String {
    let norad_id = busiest
        .norad_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "Satellite with the most transmitters:\n  Name: {}\n  NORAD ID: {}\n  Transmitters: {}\n\n",
        busiest.satellite_name.as_deref().unwrap_or("Unknown"),
        norad_id,
        busiest.transmitter_count
    )
}

fn best_section(best: &BestTransmitter) -> String {
    let Some(record) = &best.record else {
        return "No transmitter data available for analysis.\n".to_string();
    };

    let lines = [
        "Best transmitter by successful observations:".to_string(),
        format!("  UUID: {}", record.uuid),
        format!("  Description: {}", or_dash(record.description.as_deref())),
        format!("  Type: {}", or_dash(record.kind.as_deref())),
        format!("  Status: {}", or_dash(record.status.as_deref())),
        format!("  Successful observations: {:.2}%", best.success_percentage),
    ];
    format!("{}\n", lines.join("\n"))
}

/// Renders the analysis as the plain-text report printed to stdout.
pub fn render(outcome: &AnalysisOutcome) -> String {
    let mut out = format!("{}\n\n", RULE);

    match outcome {
        AnalysisOutcome::NoTransmitters => out.push_str("No transmitter data.\n"),
        AnalysisOutcome::NoSatellite => out.push_str("Could not determine the satellite.\n"),
        AnalysisOutcome::Analyzed { busiest, best } => {
            out.push_str(&busiest_section(busiest));
            out.push_str(&best_section(best));
        }
    }

    out
}
