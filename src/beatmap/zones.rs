// Zone assignment
// Cyclic ping-pong pattern across zones, millisecond rounding at assembly

use super::Note;

/// Build the cyclic zone pattern: an ascending run over all zones, then a
/// descending run that excludes both endpoints
///
/// For 5 zones this yields 0,1,2,3,4,3,2,1; cycling it sweeps back and
/// forth with no adjacent repeats (for 2+ zones). A single zone
/// degenerates to [0].
pub fn zone_pattern(zone_count: u32) -> Vec<u32> {
    let mut pattern: Vec<u32> = (0..zone_count).collect();
    if zone_count >= 2 {
        pattern.extend((1..zone_count - 1).rev());
    }
    pattern
}

/// Map each filtered onset to a note
///
/// Times are rounded to the nearest millisecond here, and only here, so
/// the gap filter always compares unrounded values. Rounding is
/// half-away-from-zero (`f64::round`), which for these non-negative
/// times is round-half-up.
pub fn assign_zones(onsets: &[f64], zone_count: u32) -> Vec<Note> {
    let pattern = zone_pattern(zone_count);

    onsets
        .iter()
        .enumerate()
        .map(|(i, &t)| Note {
            time_ms: (t * 1000.0).round() as u64,
            zone: pattern[i % pattern.len()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_five_zones() {
        assert_eq!(zone_pattern(5), vec![0, 1, 2, 3, 4, 3, 2, 1]);
    }

    #[test]
    fn test_pattern_degenerate_single_zone() {
        assert_eq!(zone_pattern(1), vec![0]);
    }

    #[test]
    fn test_pattern_two_zones() {
        assert_eq!(zone_pattern(2), vec![0, 1]);
    }

    #[test]
    fn test_pattern_has_no_adjacent_repeats() {
        for zone_count in 2..=8 {
            let pattern = zone_pattern(zone_count);
            for pair in pattern.windows(2) {
                assert_ne!(pair[0], pair[1], "repeat in pattern for {} zones", zone_count);
            }
            // The cycle boundary must not repeat either
            assert_ne!(pattern[0], *pattern.last().unwrap());
        }
    }

    #[test]
    fn test_ping_pong_sequence_for_five_zones() {
        let onsets: Vec<f64> = (0..9).map(|i| i as f64).collect();
        let notes = assign_zones(&onsets, 5);
        let zones: Vec<u32> = notes.iter().map(|n| n.zone).collect();
        assert_eq!(zones, vec![0, 1, 2, 3, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_single_zone_maps_everything_to_zero() {
        let onsets: Vec<f64> = (0..5).map(|i| i as f64 * 0.4).collect();
        let notes = assign_zones(&onsets, 1);
        assert!(notes.iter().all(|n| n.zone == 0));
    }

    #[test]
    fn test_zones_stay_in_range() {
        let onsets: Vec<f64> = (0..50).map(|i| i as f64 * 0.35).collect();
        for zone_count in 1..=7 {
            let notes = assign_zones(&onsets, zone_count);
            assert!(notes.iter().all(|n| n.zone < zone_count));
        }
    }

    #[test]
    fn test_times_round_to_nearest_millisecond() {
        // 0.0625s is exactly representable, so 62.5ms exercises the
        // half-up boundary without floating-point drift
        let notes = assign_zones(&[0.0625, 0.1004, 0.2006], 5);
        assert_eq!(notes[0].time_ms, 63);
        assert_eq!(notes[1].time_ms, 100);
        assert_eq!(notes[2].time_ms, 201);
    }

    #[test]
    fn test_empty_input_yields_empty_beatmap() {
        assert!(assign_zones(&[], 5).is_empty());
        assert!(assign_zones(&[], 1).is_empty());
    }
}
