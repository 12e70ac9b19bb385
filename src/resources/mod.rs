//! Precomputed waveform tables.
//!
//! Table generation happens once, before transmission. The engine only reads
//! the finished frames.

use alloc::vec::Vec;

#[allow(unused_imports)]
use num_traits::float::Float;
use spin::Once;

use crate::config::SampleWidth;
use crate::error::ConfigError;
use crate::source::table::SampleTable;
use crate::source::Frame;
use crate::SAMPLE_RATE_HZ;

/// Frequency of the reference tone in Hz.
pub const TONE_FREQUENCY_HZ: u32 = 1000;

/// Amplitude of the reference tone relative to full scale.
pub const TONE_AMPLITUDE: f64 = 0.5;

static TONE_1KHZ: Once<SampleTable> = Once::new();

/// One period of a sine tone on both channels.
///
/// The table holds `sample_rate_hz / tone_hz` frames, so the tone has to divide
/// the sample rate. `amplitude` is clamped to `0.0..=1.0`.
pub fn sine_table(
    width: SampleWidth,
    tone_hz: u32,
    sample_rate_hz: u32,
    amplitude: f64,
) -> Result<SampleTable, ConfigError> {
    if tone_hz == 0 || sample_rate_hz < tone_hz || sample_rate_hz % tone_hz != 0 {
        return Err(ConfigError::InvalidTableLength);
    }

    let len = (sample_rate_hz / tone_hz) as usize;

    Ok(SampleTable::new_unchecked(
        width,
        sine_frames(width, len, amplitude),
    ))
}

/// 48 frames of a 1 kHz, 16 bit tone at 48 kHz, built on first use.
pub fn tone_1khz() -> &'static SampleTable {
    TONE_1KHZ.call_once(|| {
        let len = (SAMPLE_RATE_HZ / TONE_FREQUENCY_HZ) as usize;
        SampleTable::new_unchecked(
            SampleWidth::Bits16,
            sine_frames(SampleWidth::Bits16, len, TONE_AMPLITUDE),
        )
    })
}

fn sine_frames(width: SampleWidth, len: usize, amplitude: f64) -> Vec<Frame> {
    let scale = width.max_value() as f64 * amplitude.clamp(0.0, 1.0);

    (0..len)
        .map(|i| {
            let phase = 2.0 * core::f64::consts::PI * i as f64 / len as f64;
            let value = (phase.sin() * scale).round() as i32;
            let value = value.clamp(width.min_value(), width.max_value());
            Frame::new(value, value)
        })
        .collect()
}
