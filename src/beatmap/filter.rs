// Temporal de-duplication of onsets
// Greedy single-pass scan anchored on the last kept onset

/// Drop onsets that fall too close to the previously kept one
///
/// Greedy left-to-right: the first onset is always kept; each subsequent
/// onset is kept only if it is at least `min_gap_ms` milliseconds after
/// the last *kept* onset (not the last seen one). Earlier onsets win
/// conflicts. The comparison runs on the raw times in seconds; rounding
/// to milliseconds happens later, at beatmap assembly.
pub fn filter_onsets(onsets: &[f64], min_gap_ms: u64) -> Vec<f64> {
    let mut kept: Vec<f64> = Vec::with_capacity(onsets.len());

    for &t in onsets {
        match kept.last() {
            None => kept.push(t),
            Some(&last) if (t - last) * 1000.0 >= min_gap_ms as f64 => kept.push(t),
            _ => {}
        }
    }

    kept
}
