// Audio loading and onset detection
// WAV goes through hound; compressed formats through symphonia

pub mod decode;
pub mod ingest;
pub mod onset;

pub use ingest::{load_audio, load_wav, AudioData, DecodeError};
pub use onset::{detect_onsets, OnsetConfig};
