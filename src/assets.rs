//! The fixed batch of sounds shipped with the client.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::synth::{synthesize, FrequencyProfile, ToneSpec};
use crate::wav::{self, FormatChunk};
use crate::Error;

/// CD-quality rate, used for every asset.
const SAMPLE_RATE: u32 = 44_100;

/// 30% volume to avoid clipping.
const AMPLITUDE: f64 = 0.3;

const NOTE_DURATION: f64 = 0.3;

/// The notes fade to silence over their last 50ms.
const NOTE_FADE_OUT: f64 = 0.05;

/// Pentatonic scale, A minor: A4, C5, D5, E5.
const NOTES: [(f64, &str); 4] = [
    (440.0, "note-1.wav"),
    (523.25, "note-2.wav"),
    (587.33, "note-3.wav"),
    (659.25, "note-4.wav"),
];

fn batch() -> Result<Vec<(&'static str, ToneSpec)>, Error> {
    let mut sounds = Vec::with_capacity(NOTES.len() + 1);

    for &(hz, name) in &NOTES {
        let spec = ToneSpec::new(
            FrequencyProfile::Constant(hz),
            NOTE_DURATION,
            SAMPLE_RATE,
            AMPLITUDE,
        )?
        .with_fade_out(NOTE_FADE_OUT);
        sounds.push((name, spec));
    }

    // Error tone: a lower note, swept upward by 100 Hz from A3, no fade.
    let miss = ToneSpec::new(
        FrequencyProfile::LinearSweep {
            start_hz: 220.0,
            range_hz: 100.0,
        },
        0.2,
        SAMPLE_RATE,
        AMPLITUDE,
    )?;
    sounds.push(("miss.wav", miss));

    Ok(sounds)
}

/// Synthesize and write every asset into `out_dir`, creating the directory
/// if it is missing. Returns the created paths in batch order.
pub fn generate_all(out_dir: &Path) -> Result<Vec<PathBuf>, Error> {
    fs::create_dir_all(out_dir).map_err(|source| Error::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut created = Vec::new();
    for (name, spec) in batch()? {
        let samples = synthesize(&spec);
        let path = out_dir.join(name);
        wav::write_file(&path, &FormatChunk::mono16(spec.sample_rate()), &samples)?;
        info!("created {}", path.display());
        created.push(path);
    }

    Ok(created)
}
