// Beatmap file output
// Pretty-printed JSON array plus the post-write console summary

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use crate::beatmap::Beatmap;
use crate::error::{BeatmapError, BeatmapResult};

/// Number of notes shown in the console preview
const PREVIEW_LIMIT: usize = 10;

/// Derive the default output path from the input path
///
/// Strips the last extension segment of the file name and appends
/// `_beatmap.json`, so `music/track.ogg` becomes
/// `music/track_beatmap.json`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_beatmap.json", stem))
}

/// Write the beatmap as pretty-printed JSON
///
/// Errors name the path that was being written.
pub fn write_beatmap(beatmap: &Beatmap, path: &Path) -> BeatmapResult<()> {
    let file = File::create(path).map_err(|source| BeatmapError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, beatmap).map_err(|source| {
        BeatmapError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    })?;

    writer.flush().map_err(|source| BeatmapError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Human-readable summary printed after a successful write
///
/// Zone numbers are shown 1-based for players; the file keeps them
/// 0-based.
pub fn format_summary(beatmap: &Beatmap, output_path: &Path) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Generated {} notes", beatmap.len());
    let _ = writeln!(out, "Saved to: {}", output_path.display());

    for note in beatmap.notes.iter().take(PREVIEW_LIMIT) {
        let _ = writeln!(out, "  {}ms -> zone {}", note.time_ms, note.zone + 1);
    }
    if beatmap.len() > PREVIEW_LIMIT {
        let _ = writeln!(out, "  ... and {} more", beatmap.len() - PREVIEW_LIMIT);
    }

    out
}
