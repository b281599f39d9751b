//! Coefficient dataset
//!
//! Immutable per-band filter coefficients keyed by sample rate and band count.
//! The tables are compiled in; lookup is a match over constant arrays, so there
//! is nothing to initialise and nothing can mutate them.
//!
//! Every band of a table applies to every channel: channels differ only in
//! their gain settings and filter history.

mod tables;

use grapheq_core::{BandCount, SampleRate};
use tables::*;

/// Coefficients of one band-pass stage
///
/// The stage computes `y[n] = alpha * (x[n] - x[n-2]) + gamma * y[n-1] - beta * y[n-2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandCoefficients {
    /// Nominal centre frequency in Hz
    pub center_hz: f32,
    /// Feedback coefficient on `y[n-2]`
    pub beta: f64,
    /// Feed-forward coefficient on `x[n] - x[n-2]`
    pub alpha: f64,
    /// Feedback coefficient on `y[n-1]`
    pub gamma: f64,
}

const fn band(center_hz: f32, beta: f64, alpha: f64, gamma: f64) -> BandCoefficients {
    BandCoefficients {
        center_hz,
        beta,
        alpha,
        gamma,
    }
}

/// Look up the table for a sample rate and band count
///
/// Returns `None` for the combinations without a table (15, 25 or 31 bands
/// below 44.1 kHz).
pub fn lookup(rate: SampleRate, bands: BandCount) -> Option<&'static [BandCoefficients]> {
    let table: &'static [BandCoefficients] = match (rate, bands) {
        (SampleRate::Hz11025, BandCount::Ten) => &BANDS_10_11025,
        (SampleRate::Hz22050, BandCount::Ten) => &BANDS_10_22050,
        (SampleRate::Hz44100, BandCount::Ten) => &BANDS_10_44100,
        (SampleRate::Hz44100, BandCount::Fifteen) => &BANDS_15_44100,
        (SampleRate::Hz44100, BandCount::TwentyFive) => &BANDS_25_44100,
        (SampleRate::Hz44100, BandCount::ThirtyOne) => &BANDS_31_44100,
        (SampleRate::Hz48000, BandCount::Ten) => &BANDS_10_48000,
        (SampleRate::Hz48000, BandCount::Fifteen) => &BANDS_15_48000,
        (SampleRate::Hz48000, BandCount::TwentyFive) => &BANDS_25_48000,
        (SampleRate::Hz48000, BandCount::ThirtyOne) => &BANDS_31_48000,
        _ => return None,
    };
    Some(table)
}

/// Every `(rate, bands)` pair that has a table
pub fn supported() -> impl Iterator<Item = (SampleRate, BandCount)> {
    SampleRate::ALL.into_iter().flat_map(|rate| {
        rate.supported_bands()
            .iter()
            .map(move |&bands| (rate, bands))
    })
}
