//! IIR filter bank
//!
//! A bank of band-pass stages, one per band, run in parallel on every channel
//! and summed on top of a scaled copy of the input:
//!
//! ```text
//! y[n] = alpha * (x[n] - x[n-2]) + gamma * y[n-1] - beta * y[n-2]
//! out  = 4 * (0.25 * pcm + sum(y_band[n] * gain_band))
//! ```
//!
//! The canonical equation carries a factor of two on the right-hand side; the
//! coefficient tables have it folded in, so it must not be applied here.
//!
//! History is kept per band per channel as three-slot windows addressed by one
//! rotating index triple shared by the whole bank. The triple advances once per
//! frame, never per channel.

use crate::coefficients::{self, BandCoefficients};
use crate::controls::{ControlsMut, EqControls};
use grapheq_core::{BandCount, EqError, Result, SampleRate, StreamConfig};
use tracing::debug;

/// Input and output history of one band on one channel
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct History {
    x: [f64; 3],
    y: [f64; 3],
}

/// Positions of `n`, `n-1` and `n-2` inside every history window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RotatingIndex {
    current: usize,
    previous: usize,
    oldest: usize,
}

impl RotatingIndex {
    const INITIAL: Self = Self {
        current: 0,
        previous: 2,
        oldest: 1,
    };

    #[inline]
    fn advance(&mut self) {
        self.current = (self.current + 1) % 3;
        self.previous = (self.previous + 1) % 3;
        self.oldest = (self.oldest + 1) % 3;
    }
}

/// Graphic equalizer filter bank operating on integer PCM samples
#[derive(Debug, Clone)]
pub struct FilterBank {
    coefficients: &'static [BandCoefficients],

    /// Band-major (`band * channels + channel`)
    history: Vec<History>,

    index: RotatingIndex,
    controls: EqControls,
    sample_rate: SampleRate,
    channels: usize,
}

impl FilterBank {
    /// Create a bank for a sample rate, band count and channel count
    ///
    /// # Errors
    /// Returns `EqError::UnsupportedFormat` when there is no coefficient table
    /// for the rate and band count, or the channel count is not 1 or 2.
    pub fn new(sample_rate: SampleRate, bands: BandCount, channels: u16) -> Result<Self> {
        if channels == 0 || channels > StreamConfig::MAX_CHANNELS {
            return Err(EqError::unsupported(format!(
                "{} channels (expected 1 or 2)",
                channels
            )));
        }

        let coefficients = coefficients::lookup(sample_rate, bands).ok_or_else(|| {
            EqError::unsupported(format!(
                "no {}-band coefficient table at {}",
                bands.count(),
                sample_rate
            ))
        })?;

        let channels = usize::from(channels);
        debug!(
            "Filter bank: {} bands at {}, {} channel(s)",
            coefficients.len(),
            sample_rate,
            channels
        );

        Ok(Self {
            coefficients,
            history: vec![History::default(); coefficients.len() * channels],
            index: RotatingIndex::INITIAL,
            controls: EqControls::new(coefficients.len(), channels),
            sample_rate,
            channels,
        })
    }

    /// Create a bank matching a stream configuration
    pub fn from_config(config: &StreamConfig) -> Result<Self> {
        Self::new(config.sample_rate(), config.bands(), config.channels())
    }

    /// Sample rate the coefficients were designed for
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Number of interleaved channels
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of bands
    pub fn band_count(&self) -> usize {
        self.coefficients.len()
    }

    /// Centre frequency of a band in Hz
    pub fn band_frequency(&self, band: usize) -> Option<f32> {
        self.coefficients.get(band).map(|c| c.center_hz)
    }

    /// Centre frequencies of all bands, ascending
    pub fn band_frequencies(&self) -> Vec<f32> {
        self.coefficients.iter().map(|c| c.center_hz).collect()
    }

    /// Coefficients of a band
    pub fn coefficients(&self, band: usize) -> Option<&BandCoefficients> {
        self.coefficients.get(band)
    }

    /// Gain controls
    pub fn controls(&self) -> &EqControls {
        &self.controls
    }

    /// Setters for the gain controls
    pub fn controls_mut(&mut self) -> ControlsMut<'_> {
        ControlsMut::new(&mut self.controls)
    }

    /// Filter interleaved samples in place
    ///
    /// `samples.len()` should be a whole number of frames; a trailing partial
    /// frame is left untouched.
    pub fn process(&mut self, samples: &mut [i32]) {
        let channels = self.channels;
        for frame in samples.chunks_exact_mut(channels) {
            let RotatingIndex {
                current: i,
                previous: j,
                oldest: k,
            } = self.index;

            for (channel, sample) in frame.iter_mut().enumerate() {
                // Preamp is applied in single precision, then widened
                let pcm = f64::from(*sample as f32 * self.controls.preamp_unchecked(channel));

                let mut out = 0.0_f64;
                for (band, cf) in self.coefficients.iter().enumerate() {
                    let h = &mut self.history[band * channels + channel];
                    h.x[i] = pcm;
                    h.y[i] = cf.alpha * (pcm - h.x[k]) + cf.gamma * h.y[j] - cf.beta * h.y[k];
                    out += h.y[i] * f64::from(self.controls.band_unchecked(band, channel));
                }

                out += pcm * 0.25;
                out *= 4.0;

                // Truncates toward zero, saturating at the i32 range
                *sample = out as i32;
            }

            self.index.advance();
        }
    }

    /// Zero all filter history and rewind the rotating index
    ///
    /// Call when the input is repositioned; feeding discontinuous input into
    /// live history produces a transient.
    pub fn clean_history(&mut self) {
        self.history.fill(History::default());
        self.index = RotatingIndex::INITIAL;
        debug!("Filter history cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank(rate: SampleRate, bands: BandCount, channels: u16) -> FilterBank {
        FilterBank::new(rate, bands, channels).unwrap()
    }

    #[test]
    fn rotating_index_cycles() {
        let mut index = RotatingIndex::INITIAL;
        index.advance();
        assert_eq!((index.current, index.previous, index.oldest), (1, 0, 2));
        index.advance();
        assert_eq!((index.current, index.previous, index.oldest), (2, 1, 0));
        index.advance();
        assert_eq!(index, RotatingIndex::INITIAL);
    }

    #[test]
    fn unsupported_combinations_fail() {
        assert!(matches!(
            FilterBank::new(SampleRate::Hz11025, BandCount::ThirtyOne, 2),
            Err(EqError::UnsupportedFormat(_))
        ));
        assert!(FilterBank::new(SampleRate::Hz44100, BandCount::Ten, 3).is_err());
        assert!(FilterBank::new(SampleRate::Hz44100, BandCount::Ten, 0).is_err());
    }

    #[test]
    fn band_frequencies_follow_the_table() {
        let bank = bank(SampleRate::Hz44100, BandCount::Ten, 2);
        assert_eq!(bank.band_count(), 10);
        assert_eq!(bank.band_frequency(0), Some(31.0));
        assert_eq!(bank.band_frequency(5), Some(1000.0));
        assert_eq!(bank.band_frequency(9), Some(16000.0));
        assert_eq!(bank.band_frequency(10), None);
        assert_eq!(bank.band_frequencies().len(), 10);
    }

    #[test]
    fn flat_controls_are_bit_exact_pass_through() {
        let mut bank = bank(SampleRate::Hz48000, BandCount::ThirtyOne, 2);
        let input: Vec<i32> = (0..2000).map(|n| ((n * 7919) % 65_536) - 32_768).collect();
        let mut samples = input.clone();

        bank.process(&mut samples);

        assert_eq!(samples, input);
    }

    #[test]
    fn clean_history_then_silence_is_silent() {
        for (rate, bands) in coefficients::supported() {
            for channels in 1..=2 {
                let mut bank = bank(rate, bands, channels);
                for band in 0..bank.band_count() {
                    bank.controls_mut().set_band_value_all(band, 0.8).unwrap();
                }

                let mut noise: Vec<i32> = (0..512).map(|n| (n * 37 % 2001) - 1000).collect();
                bank.process(&mut noise);

                bank.clean_history();
                let mut silence = vec![0_i32; 256 * usize::from(channels)];
                bank.process(&mut silence);

                assert!(
                    silence.iter().all(|&s| s == 0),
                    "{:?} {:?} {}ch produced output from silence",
                    rate,
                    bands,
                    channels
                );
            }
        }
    }

    #[test]
    fn clean_history_makes_processing_repeatable() {
        let mut bank = bank(SampleRate::Hz44100, BandCount::Fifteen, 2);
        bank.controls_mut().set_band_value(3, 0, 0.6).unwrap();
        bank.controls_mut().set_band_value(12, 1, -0.2).unwrap();

        let input: Vec<i32> = (0..400).map(|n| (n % 50) * 300 - 7500).collect();

        let mut first = input.clone();
        bank.process(&mut first);
        bank.clean_history();
        let mut second = input;
        bank.process(&mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn history_carries_across_blocks() {
        let input: Vec<i32> = (0..600).map(|n| ((n * 131) % 4001) - 2000).collect();

        let mut whole_bank = bank(SampleRate::Hz22050, BandCount::Ten, 2);
        whole_bank.controls_mut().set_band_value_all(2, 0.5).unwrap();
        let mut whole = input.clone();
        whole_bank.process(&mut whole);

        let mut split_bank = bank(SampleRate::Hz22050, BandCount::Ten, 2);
        split_bank.controls_mut().set_band_value_all(2, 0.5).unwrap();
        let mut split = input;
        let (head, tail) = split.split_at_mut(202);
        split_bank.process(head);
        split_bank.process(tail);

        assert_eq!(whole, split);
    }

    #[test]
    fn band_gain_changes_the_signal() {
        let mut bank = bank(SampleRate::Hz44100, BandCount::Ten, 1);
        bank.controls_mut().set_band_db(5, 0, 12.0).unwrap();

        // 1 kHz tone sits in band 5
        let input: Vec<i32> = (0..4410)
            .map(|n| {
                let t = n as f64 / 44_100.0;
                (8000.0 * (2.0 * std::f64::consts::PI * 1000.0 * t).sin()) as i32
            })
            .collect();
        let mut output = input.clone();
        bank.process(&mut output);

        let peak_in = input.iter().map(|s| s.abs()).max().unwrap();
        let peak_out = output[2205..].iter().map(|s| s.abs()).max().unwrap();
        assert!(peak_out > peak_in, "boosted band should raise the level");
    }

    #[test]
    fn zero_preamp_silences_output() {
        let mut bank = bank(SampleRate::Hz48000, BandCount::TwentyFive, 2);
        bank.controls_mut().set_preamp_value(0, 0.0).unwrap();
        bank.controls_mut().set_band_value_all(10, 1.0).unwrap();

        let mut samples: Vec<i32> = (0..200).map(|n| n * 100).collect();
        bank.process(&mut samples);

        for frame in samples.chunks_exact(2) {
            assert_eq!(frame[0], 0);
        }
    }
}
