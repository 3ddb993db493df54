use crate::domain::model::{AnalysisOutcome, BestTransmitter, BusiestSatellite, TransmitterRecord};
use std::collections::HashMap;

/// Where the busiest satellite's reported name comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NamePolicy {
    /// First record of the last group in iteration order, whichever group won.
    /// Matches the historical output of this report.
    #[default]
    LastGroup,
    /// First record of the winning group.
    WinningGroup,
}

type SatelliteGroup<'a> = (Option<i64>, Vec<&'a TransmitterRecord>);

/// Groups records by NORAD id, in order of first appearance. Records without
/// an id share the `None` group.
fn group_by_satellite(records: &[TransmitterRecord]) -> Vec<SatelliteGroup<'_>> {
    let mut index: HashMap<Option<i64>, usize> = HashMap::new();
    let mut groups: Vec<SatelliteGroup<'_>> = Vec::new();

    for record in records {
        match index.get(&record.satellite_norad) {
            Some(&position) => groups[position].1.push(record),
            None => {
                index.insert(record.satellite_norad, groups.len());
                groups.push((record.satellite_norad, vec![record]));
            }
        }
    }

    groups
}

pub fn find_busiest(records: &[TransmitterRecord]) -> BusiestSatellite {
    find_busiest_with(records, NamePolicy::default())
}

pub fn find_busiest_with(records: &[TransmitterRecord], policy: NamePolicy) -> BusiestSatellite {
    let groups = group_by_satellite(records);

    let mut winner: Option<usize> = None;
    let mut max_count = 0;
    for (position, (_, transmitters)) in groups.iter().enumerate() {
        // Strict comparison: an equal count never displaces an earlier group.
        if transmitters.len() > max_count {
            max_count = transmitters.len();
            winner = Some(position);
        }
    }

    let Some(winner) = winner else {
        return BusiestSatellite::none();
    };
    // A winning group without an id identifies no satellite at all.
    let Some(norad_id) = groups[winner].0 else {
        return BusiestSatellite::none();
    };

    let name_group = match policy {
        NamePolicy::LastGroup => groups.last(),
        NamePolicy::WinningGroup => groups.get(winner),
    };
    let satellite_name = name_group
        .and_then(|(_, transmitters)| transmitters.first())
        .and_then(|record| record.satellite_name.clone());

    BusiestSatellite {
        norad_id: Some(norad_id),
        satellite_name,
        transmitter_count: max_count,
    }
}

/// Records belonging to one satellite, in source order.
pub fn satellite_transmitters(records: &[TransmitterRecord], norad_id: i64) -> Vec<TransmitterRecord> {
    records
        .iter()
        .filter(|record| record.satellite_norad == Some(norad_id))
        .cloned()
        .collect()
}

pub fn find_best(records: &[TransmitterRecord]) -> BestTransmitter {
    let mut best = BestTransmitter::none();

    for record in records {
        let percentage = record.success_percentage();
        if percentage > best.success_percentage {
            best.success_percentage = percentage;
            best.record = Some(record.clone());
        }
    }

    best
}

pub fn analyze(records: &[TransmitterRecord]) -> AnalysisOutcome {
    if records.is_empty() {
        return AnalysisOutcome::NoTransmitters;
    }

    let busiest = find_busiest(records);
    let Some(norad_id) = busiest.norad_id else {
        return AnalysisOutcome::NoSatellite;
    };

    let candidates = satellite_transmitters(records, norad_id);
    tracing::debug!(
        "Ranking {} transmitters of satellite {}",
        candidates.len(),
        norad_id
    );
    let best = find_best(&candidates);

    AnalysisOutcome::Analyzed { busiest, best }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(norad: i64, uuid: &str, name: &str) -> TransmitterRecord {
        TransmitterRecord::new(norad, uuid).with_name(name)
    }

    #[test]
    fn test_find_busiest_empty() {
        assert_eq!(find_busiest(&[]), BusiestSatellite::none());
    }

    #[test]
    fn test_find_busiest_picks_largest_group() {
        let records = vec![
            named(1, "a", "ONE"),
            named(2, "b", "TWO"),
            named(2, "c", "TWO"),
            named(2, "d", "TWO"),
            named(3, "e", "THREE"),
        ];

        let result = find_busiest_with(&records, NamePolicy::WinningGroup);
        assert_eq!(result.norad_id, Some(2));
        assert_eq!(result.transmitter_count, 3);
        assert_eq!(result.satellite_name.as_deref(), Some("TWO"));
    }

    #[test]
    fn test_find_busiest_tie_keeps_first_group() {
        let records = vec![
            named(1, "a", "ONE"),
            named(2, "b", "TWO"),
            named(2, "c", "TWO"),
            named(1, "d", "ONE"),
        ];

        let result = find_busiest(&records);
        assert_eq!(result.norad_id, Some(1));
        assert_eq!(result.transmitter_count, 2);
    }

    #[test]
    fn test_find_busiest_name_comes_from_last_group_by_default() {
        let records = vec![
            named(1, "a", "ONE"),
            named(1, "b", "ONE"),
            named(2, "c", "TWO-first"),
            named(2, "d", "TWO-second"),
            named(5, "e", "FIVE"),
            named(3, "f", "THREE"),
        ];

        let compat = find_busiest(&records);
        assert_eq!(compat.norad_id, Some(1));
        assert_eq!(compat.satellite_name.as_deref(), Some("THREE"));

        let corrected = find_busiest_with(&records, NamePolicy::WinningGroup);
        assert_eq!(corrected.norad_id, Some(1));
        assert_eq!(corrected.satellite_name.as_deref(), Some("ONE"));
    }

    #[test]
    fn test_find_busiest_single_record() {
        let records = vec![named(42, "a", "ANSWER")];
        let result = find_busiest(&records);
        assert_eq!(result.norad_id, Some(42));
        assert_eq!(result.satellite_name.as_deref(), Some("ANSWER"));
        assert_eq!(result.transmitter_count, 1);
    }

    #[test]
    fn test_find_busiest_group_without_id_wins() {
        let records = vec![
            named(1, "a", "ONE"),
            TransmitterRecord::new(0, "b").without_norad(),
            TransmitterRecord::new(0, "c").without_norad(),
        ];

        assert_eq!(find_busiest(&records), BusiestSatellite::none());
        assert_eq!(
            find_busiest_with(&records, NamePolicy::WinningGroup),
            BusiestSatellite::none()
        );
    }

    #[test]
    fn test_find_busiest_group_without_id_loses() {
        let records = vec![
            named(4, "a", "FOUR"),
            TransmitterRecord::new(0, "b").without_norad(),
            named(4, "c", "FOUR"),
        ];

        let result = find_busiest(&records);
        assert_eq!(result.norad_id, Some(4));
        assert_eq!(result.transmitter_count, 2);
        // The id-less group came last and carries no name.
        assert_eq!(result.satellite_name, None);
    }

    #[test]
    fn test_analyze_no_satellite_when_group_without_id_wins() {
        let records = vec![
            TransmitterRecord::new(0, "a").without_norad().with_stat(2, 2),
            named(1, "b", "ONE"),
            TransmitterRecord::new(0, "c").without_norad(),
        ];

        assert_eq!(analyze(&records), AnalysisOutcome::NoSatellite);
    }

    #[test]
    fn test_find_best_empty() {
        let result = find_best(&[]);
        assert!(result.record.is_none());
        assert_eq!(result.success_percentage, -1.0);
    }

    #[test]
    fn test_find_best_highest_percentage() {
        let records = vec![
            TransmitterRecord::new(1, "a").with_stat(10, 2),
            TransmitterRecord::new(1, "b").with_stat(10, 7),
            TransmitterRecord::new(1, "c").with_stat(0, 0),
        ];

        let result = find_best(&records);
        assert_eq!(result.record.unwrap().uuid, "b");
        assert_eq!(result.success_percentage, 70.0);
    }

    #[test]
    fn test_find_best_tie_keeps_first() {
        let records = vec![
            TransmitterRecord::new(1, "first").with_stat(4, 2),
            TransmitterRecord::new(1, "second").with_stat(10, 5),
        ];

        let result = find_best(&records);
        assert_eq!(result.record.unwrap().uuid, "first");
        assert_eq!(result.success_percentage, 50.0);
    }

    #[test]
    fn test_find_best_zero_stats_still_selected() {
        let records = vec![
            TransmitterRecord::new(1, "no-stat"),
            TransmitterRecord::new(1, "zero-total").with_stat(0, 0),
        ];

        let result = find_best(&records);
        assert_eq!(result.record.unwrap().uuid, "no-stat");
        assert_eq!(result.success_percentage, 0.0);
    }

    #[test]
    fn test_satellite_transmitters_preserves_order() {
        let records = vec![
            TransmitterRecord::new(1, "a"),
            TransmitterRecord::new(2, "b"),
            TransmitterRecord::new(1, "c"),
        ];

        let subset = satellite_transmitters(&records, 1);
        let uuids: Vec<&str> = subset.iter().map(|r| r.uuid.as_str()).collect();
        assert_eq!(uuids, vec!["a", "c"]);
        assert!(satellite_transmitters(&records, 9).is_empty());
    }

    #[test]
    fn test_analyze_empty() {
        assert_eq!(analyze(&[]), AnalysisOutcome::NoTransmitters);
    }

    #[test]
    fn test_analyze_only_ranks_busiest_satellite() {
        let records = vec![
            named(7, "other", "OTHER").with_stat(1, 1),
            named(9, "low", "NINE").with_stat(10, 1),
            named(9, "high", "NINE").with_stat(10, 9),
        ];

        match analyze(&records) {
            AnalysisOutcome::Analyzed { busiest, best } => {
                assert_eq!(busiest.norad_id, Some(9));
                assert_eq!(busiest.transmitter_count, 2);
                assert_eq!(best.record.unwrap().uuid, "high");
                assert_eq!(best.success_percentage, 90.0);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_analyze_is_repeatable() {
        let records = vec![
            named(1, "a", "ONE").with_stat(3, 1),
            named(2, "b", "TWO").with_stat(3, 2),
            named(2, "c", "TWO").with_stat(3, 3),
            named(1, "d", "ONE").with_stat(3, 3),
        ];

        let first = analyze(&records);
        for _ in 0..3 {
            assert_eq!(analyze(&records), first);
        }
    }
}
