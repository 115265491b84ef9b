// Beatsmith CLI
// Generates a rhythm-game beatmap JSON from an audio file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use beatsmith::beatmap::writer;
use beatsmith::config::GeneratorConfig;
use beatsmith::pipeline;

#[derive(Parser, Debug)]
#[command(
    name = "beatsmith",
    about = "Generate a rhythm-game beatmap from an audio file"
)]
struct Cli {
    /// Path to the audio file (wav, mp3, ogg, flac)
    audio: PathBuf,

    /// Output JSON file path (defaults to <input-basename>_beatmap.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of zones
    #[arg(short, long, default_value_t = 5)]
    zones: u32,

    /// Sensitivity 0.0 (all onsets) - 1.0 (only strong hits)
    #[arg(short, long, default_value_t = 0.5)]
    sensitivity: f32,

    /// Minimum gap between notes in milliseconds
    #[arg(short = 'g', long, default_value_t = 300)]
    min_gap: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GeneratorConfig {
        zone_count: cli.zones,
        sensitivity: cli.sensitivity,
        min_gap_ms: cli.min_gap,
    };

    let output_path = cli
        .output
        .unwrap_or_else(|| writer::default_output_path(&cli.audio));

    let beatmap = pipeline::generate_from_file(&cli.audio, &config)
        .with_context(|| format!("generating beatmap for {}", cli.audio.display()))?;

    writer::write_beatmap(&beatmap, &output_path)?;

    print!("{}", writer::format_summary(&beatmap, &output_path));

    Ok(())
}
