//! Build-time generator for the client's UI feedback sounds.
//!
//! Five short tones are synthesized as mono 16-bit PCM and written out as
//! uncompressed WAV files: four fixed-pitch notes with a fade-out tail, and
//! one low swept "miss" tone. Everything is deterministic; regenerating the
//! assets produces byte-identical files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub mod assets;
pub mod synth;
pub mod wav;

pub use assets::generate_all;
pub use synth::{synthesize, FrequencyProfile, ToneSpec};
pub use wav::FormatChunk;

/// Errors produced while synthesizing or writing a sound.
#[derive(Error, Debug)]
pub enum Error {
    /// A tone was requested with a non-positive duration or rate.
    #[error("invalid tone parameters: {0}")]
    InvalidParameter(String),

    /// Creating or writing an output file (or its directory) failed.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
