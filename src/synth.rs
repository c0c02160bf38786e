//! Tone synthesis: a `ToneSpec` describes one sound, `synthesize` renders
//! it into a buffer of quantized samples.

use std::f64::consts::PI;

use log::debug;

use crate::Error;

/// Instantaneous frequency of a tone, either fixed for the whole duration
/// or swept linearly across the buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrequencyProfile {
    Constant(f64),
    /// Linear ramp from `start_hz` to `start_hz + range_hz` over the tone's
    /// duration.
    LinearSweep { start_hz: f64, range_hz: f64 },
}

impl FrequencyProfile {
    /// Frequency at buffer progress `p` in `[0, 1)`.
    fn hz_at(&self, p: f64) -> f64 {
        match *self {
            FrequencyProfile::Constant(hz) => hz,
            FrequencyProfile::LinearSweep { start_hz, range_hz } => start_hz + range_hz * p,
        }
    }
}

/// One requested sound: what to synthesize, at which rate, how loud.
#[derive(Debug, Clone, Copy)]
pub struct ToneSpec {
    frequency: FrequencyProfile,
    duration_secs: f64,
    sample_rate: u32,
    amplitude: f64,
    fade_out: Option<f64>,
}

impl ToneSpec {
    /// A tone with no envelope. `amplitude` scales the full 16-bit range,
    /// so it must stay in `[0, 1]`.
    pub fn new(
        frequency: FrequencyProfile,
        duration_secs: f64,
        sample_rate: u32,
        amplitude: f64,
    ) -> Result<ToneSpec, Error> {
        if !(duration_secs > 0.0) {
            return Err(Error::InvalidParameter(format!(
                "duration must be positive, got {duration_secs}"
            )));
        }
        if sample_rate == 0 {
            return Err(Error::InvalidParameter(
                "sample rate must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&amplitude) {
            return Err(Error::InvalidParameter(format!(
                "amplitude must be within [0, 1], got {amplitude}"
            )));
        }

        Ok(ToneSpec {
            frequency,
            duration_secs,
            sample_rate,
            amplitude,
            fade_out: None,
        })
    }

    /// Fade linearly to silence over the last `secs` seconds.
    pub fn with_fade_out(mut self, secs: f64) -> ToneSpec {
        self.fade_out = Some(secs);
        self
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples `synthesize` will produce for this spec.
    pub fn sample_count(&self) -> usize {
        (f64::from(self.sample_rate) * self.duration_secs) as usize
    }
}

/// Render a spec into a mono buffer of signed 16-bit samples.
pub fn synthesize(spec: &ToneSpec) -> Vec<i16> {
    let rate = f64::from(spec.sample_rate);
    let total = spec.sample_count();

    // Fade window as (start index, length), both in fractional samples.
    let fade = spec
        .fade_out
        .map(|secs| (rate * (spec.duration_secs - secs), rate * secs));

    let mut samples = Vec::with_capacity(total);
    for i in 0..total {
        let t = i as f64 / rate;
        let hz = spec.frequency.hz_at(i as f64 / total as f64);
        let mut sample = (2.0 * PI * hz * t).sin();

        if let Some((start, window)) = fade {
            if i as f64 > start {
                sample *= 1.0 - (i as f64 - start) / window;
            }
        }

        // |sin| <= 1 and amplitude <= 1, so the scaled value stays inside
        // the 16-bit range; the cast truncates toward zero.
        let scaled = sample * spec.amplitude * f64::from(i16::MAX);
        debug_assert!(scaled.abs() <= f64::from(i16::MAX));
        samples.push(scaled as i16);
    }

    debug!(
        "synthesized {} samples ({:?}, {}s at {} Hz)",
        samples.len(),
        spec.frequency,
        spec.duration_secs,
        spec.sample_rate
    );

    samples
}
