// Pipeline composition
// validate -> load -> detect -> filter -> assign, strictly forward

use std::path::Path;

use crate::audio::{self, AudioData, OnsetConfig};
use crate::beatmap::{filter, zones, Beatmap};
use crate::config::GeneratorConfig;
use crate::error::BeatmapResult;

/// Run the onset-to-beatmap transformation on already-loaded audio
pub fn generate_beatmap(audio: &AudioData, config: &GeneratorConfig) -> BeatmapResult<Beatmap> {
    config.validate()?;

    let onset_config = OnsetConfig {
        sensitivity: config.sensitivity,
        ..OnsetConfig::default()
    };

    let onsets = audio::detect_onsets(audio, &onset_config);
    log::info!("Detected {} raw onsets", onsets.len());

    let filtered = filter::filter_onsets(&onsets, config.min_gap_ms);
    log::info!(
        "{} onsets kept after {} ms gap filter",
        filtered.len(),
        config.min_gap_ms
    );

    let notes = zones::assign_zones(&filtered, config.zone_count);

    Ok(Beatmap { notes })
}

/// Load an audio file and run the full pipeline on it
///
/// Configuration is validated before the file is touched, so a bad
/// parameter never costs a decode.
pub fn generate_from_file(path: &Path, config: &GeneratorConfig) -> BeatmapResult<Beatmap> {
    config.validate()?;

    let audio = audio::load_audio(path)?;
    log::info!(
        "Loaded {}: {} Hz, {} channel(s), {:.2} s",
        path.display(),
        audio.sample_rate,
        audio.channels,
        audio.duration_secs()
    );

    generate_beatmap(&audio, config)
}
