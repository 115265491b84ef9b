// Beatsmith - audio to rhythm-game beatmap generator
// Module declarations

pub mod audio;
pub mod beatmap;
pub mod config;
pub mod error;
pub mod pipeline;

pub use beatmap::{Beatmap, Note};
pub use config::{ConfigError, GeneratorConfig};
pub use error::{BeatmapError, BeatmapResult};
pub use pipeline::{generate_beatmap, generate_from_file};
