//! Equalizer controls
//!
//! Gain state consulted by the filter bank on every sample:
//! - Preamp per channel, linear domain `[0.0, 1.0]`
//! - Band gain per band per channel, linear domain `[-0.2, 1.0]`
//! - dB setters mapping `[-12, 12]` dB onto the linear domains
//!
//! Setters store what they are given. Out-of-domain values are the caller's
//! responsibility and are neither clamped nor rejected.

use crate::settings::EqSettings;
use grapheq_core::{EqError, Result};
use std::ops::{Deref, RangeInclusive};

// Empirical exponential fits over -12..12 dB. Kept at full precision so the
// mapped values are reproducible.
#[allow(clippy::excessive_precision)]
const PREAMP_DB_SCALE: f64 = 9.9999946497217584440165E-01;
#[allow(clippy::excessive_precision)]
const PREAMP_DB_EXPONENT: f64 = 6.9314738656671842642609E-02;
#[allow(clippy::excessive_precision)]
const PREAMP_DB_OFFSET: f64 = 3.7119444716771825623636E-07;

#[allow(clippy::excessive_precision)]
const BAND_DB_SCALE: f64 = 2.5220207857061455181125E-01;
#[allow(clippy::excessive_precision)]
const BAND_DB_EXPONENT: f64 = 8.0178361802353992349168E-02;
#[allow(clippy::excessive_precision)]
const BAND_DB_OFFSET: f64 = 2.5220207852836562523180E-01;

/// Map a preamp level in dB to the linear domain
pub fn preamp_db_to_linear(db: f32) -> f32 {
    (PREAMP_DB_SCALE * (PREAMP_DB_EXPONENT * f64::from(db)).exp() + PREAMP_DB_OFFSET) as f32
}

/// Map a band gain in dB to the linear domain
pub fn band_db_to_linear(db: f32) -> f32 {
    (BAND_DB_SCALE * (BAND_DB_EXPONENT * f64::from(db)).exp() - BAND_DB_OFFSET) as f32
}

/// Inverse of `preamp_db_to_linear`
///
/// Levels at or below the fit's offset have no dB value and map to negative
/// infinity.
pub fn preamp_linear_to_db(linear: f32) -> f32 {
    let scaled = (f64::from(linear) - PREAMP_DB_OFFSET) / PREAMP_DB_SCALE;
    if scaled <= 0.0 {
        return f32::NEG_INFINITY;
    }
    (scaled.ln() / PREAMP_DB_EXPONENT) as f32
}

/// Inverse of `band_db_to_linear`
///
/// Gains at or below `-0.2522` have no dB value and map to negative infinity.
pub fn band_linear_to_db(linear: f32) -> f32 {
    let scaled = (f64::from(linear) + BAND_DB_OFFSET) / BAND_DB_SCALE;
    if scaled <= 0.0 {
        return f32::NEG_INFINITY;
    }
    (scaled.ln() / BAND_DB_EXPONENT) as f32
}

/// Preamp and band gains for every channel
#[derive(Debug, Clone, PartialEq)]
pub struct EqControls {
    /// Linear preamp, one per channel
    preamp: Vec<f32>,

    /// Linear band gain, band-major (`band * channels + channel`)
    bands: Vec<f32>,

    channels: usize,
    band_count: usize,
}

impl EqControls {
    /// Smallest documented linear preamp
    pub const MIN_PREAMP: f32 = 0.0;
    /// Largest documented linear preamp
    pub const MAX_PREAMP: f32 = 1.0;
    /// Smallest documented linear band gain
    pub const MIN_BAND: f32 = -0.2;
    /// Largest documented linear band gain
    pub const MAX_BAND: f32 = 1.0;
    /// Smallest documented preamp level in dB
    pub const MIN_PREAMP_DB: f32 = -12.0;
    /// Largest documented preamp level in dB
    pub const MAX_PREAMP_DB: f32 = 12.0;
    /// Smallest documented band gain in dB
    pub const MIN_BAND_DB: f32 = -12.0;
    /// Largest documented band gain in dB
    pub const MAX_BAND_DB: f32 = 12.0;

    /// Create flat controls: preamp 1.0 and every band 0.0
    pub fn new(band_count: usize, channels: usize) -> Self {
        Self {
            preamp: vec![1.0; channels],
            bands: vec![0.0; band_count * channels],
            channels,
            band_count,
        }
    }

    /// Number of channels
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Number of bands
    pub fn band_count(&self) -> usize {
        self.band_count
    }

    /// Get the linear preamp of a channel
    pub fn preamp_value(&self, channel: usize) -> Option<f32> {
        self.preamp.get(channel).copied()
    }

    /// Set the linear preamp of a channel
    pub fn set_preamp_value(&mut self, channel: usize, value: f32) -> Result<()> {
        let index = self.preamp_index(channel)?;
        self.preamp[index] = value;
        Ok(())
    }

    /// Get the preamp of a channel in dB
    pub fn preamp_db(&self, channel: usize) -> Option<f32> {
        self.preamp_value(channel).map(preamp_linear_to_db)
    }

    /// Set the preamp of a channel in dB
    pub fn set_preamp_db(&mut self, channel: usize, db: f32) -> Result<()> {
        self.set_preamp_value(channel, preamp_db_to_linear(db))
    }

    /// Get the linear gain of a band on a channel
    pub fn band_value(&self, band: usize, channel: usize) -> Option<f32> {
        self.band_index(band, channel)
            .ok()
            .map(|index| self.bands[index])
    }

    /// Set the linear gain of a band on a channel
    pub fn set_band_value(&mut self, band: usize, channel: usize, value: f32) -> Result<()> {
        let index = self.band_index(band, channel)?;
        self.bands[index] = value;
        Ok(())
    }

    /// Get the gain of a band on a channel in dB
    pub fn band_db(&self, band: usize, channel: usize) -> Option<f32> {
        self.band_value(band, channel).map(band_linear_to_db)
    }

    /// Set the gain of a band on a channel in dB
    pub fn set_band_db(&mut self, band: usize, channel: usize, db: f32) -> Result<()> {
        self.set_band_value(band, channel, band_db_to_linear(db))
    }

    /// Set the same linear gain for a band on every channel
    pub fn set_band_value_all(&mut self, band: usize, value: f32) -> Result<()> {
        for channel in 0..self.channels {
            self.set_band_value(band, channel, value)?;
        }
        Ok(())
    }

    /// Reset to flat: preamp 1.0, every band 0.0
    pub fn reset_to_flat(&mut self) {
        self.preamp.fill(1.0);
        self.bands.fill(0.0);
    }

    /// Documented linear preamp domain
    pub fn preamp_range(&self) -> RangeInclusive<f32> {
        Self::MIN_PREAMP..=Self::MAX_PREAMP
    }

    /// Documented linear band gain domain
    pub fn band_range(&self) -> RangeInclusive<f32> {
        Self::MIN_BAND..=Self::MAX_BAND
    }

    /// Documented preamp dB domain
    pub fn preamp_db_range(&self) -> RangeInclusive<f32> {
        Self::MIN_PREAMP_DB..=Self::MAX_PREAMP_DB
    }

    /// Documented band dB domain
    pub fn band_db_range(&self) -> RangeInclusive<f32> {
        Self::MIN_BAND_DB..=Self::MAX_BAND_DB
    }

    /// Capture the current gains
    pub fn settings(&self) -> EqSettings {
        EqSettings {
            preamp: self.preamp.clone(),
            bands: self
                .bands
                .chunks_exact(self.channels.max(1))
                .map(<[f32]>::to_vec)
                .collect(),
        }
    }

    /// Restore gains captured by `settings`
    ///
    /// # Errors
    /// Returns `EqError::InvalidInput` if the snapshot's channel or band count
    /// differs from this bank's; nothing is changed in that case.
    pub fn apply_settings(&mut self, settings: &EqSettings) -> Result<()> {
        if settings.preamp.len() != self.channels {
            return Err(EqError::invalid_input(format!(
                "settings carry {} preamp channels, bank has {}",
                settings.preamp.len(),
                self.channels
            )));
        }
        if settings.bands.len() != self.band_count {
            return Err(EqError::invalid_input(format!(
                "settings carry {} bands, bank has {}",
                settings.bands.len(),
                self.band_count
            )));
        }
        if let Some(row) = settings.bands.iter().find(|row| row.len() != self.channels) {
            return Err(EqError::invalid_input(format!(
                "band row carries {} channels, bank has {}",
                row.len(),
                self.channels
            )));
        }

        self.preamp.copy_from_slice(&settings.preamp);
        for (dst, row) in self.bands.chunks_exact_mut(self.channels).zip(&settings.bands) {
            dst.copy_from_slice(row);
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn preamp_unchecked(&self, channel: usize) -> f32 {
        self.preamp[channel]
    }

    #[inline]
    pub(crate) fn band_unchecked(&self, band: usize, channel: usize) -> f32 {
        self.bands[band * self.channels + channel]
    }

    fn preamp_index(&self, channel: usize) -> Result<usize> {
        if channel < self.channels {
            Ok(channel)
        } else {
            Err(EqError::ChannelOutOfRange {
                channel,
                channels: self.channels,
            })
        }
    }

    fn band_index(&self, band: usize, channel: usize) -> Result<usize> {
        let channel = self.preamp_index(channel)?;
        if band < self.band_count {
            Ok(band * self.channels + channel)
        } else {
            Err(EqError::BandOutOfRange {
                band,
                bands: self.band_count,
            })
        }
    }
}

/// Write access to the gains of a running filter bank
///
/// Exposes the setters only. The shape (band and channel count) is fixed by
/// the bank, so the controls themselves cannot be swapped out:
///
/// ```compile_fail
/// use grapheq_core::{BandCount, SampleRate};
/// use grapheq_dsp::{EqControls, FilterBank};
///
/// let mut bank = FilterBank::new(SampleRate::Hz44100, BandCount::ThirtyOne, 2).unwrap();
/// *bank.controls_mut() = EqControls::new(10, 1);
/// ```
///
/// Reshaped gains go through `apply_settings`, which rejects a mismatch.
#[derive(Debug)]
pub struct ControlsMut<'a> {
    controls: &'a mut EqControls,
}

impl<'a> ControlsMut<'a> {
    pub(crate) fn new(controls: &'a mut EqControls) -> Self {
        Self { controls }
    }

    /// See [`EqControls::set_preamp_value`]
    pub fn set_preamp_value(&mut self, channel: usize, value: f32) -> Result<()> {
        self.controls.set_preamp_value(channel, value)
    }

    /// See [`EqControls::set_preamp_db`]
    pub fn set_preamp_db(&mut self, channel: usize, db: f32) -> Result<()> {
        self.controls.set_preamp_db(channel, db)
    }

    /// See [`EqControls::set_band_value`]
    pub fn set_band_value(&mut self, band: usize, channel: usize, value: f32) -> Result<()> {
        self.controls.set_band_value(band, channel, value)
    }

    /// See [`EqControls::set_band_db`]
    pub fn set_band_db(&mut self, band: usize, channel: usize, db: f32) -> Result<()> {
        self.controls.set_band_db(band, channel, db)
    }

    /// See [`EqControls::set_band_value_all`]
    pub fn set_band_value_all(&mut self, band: usize, value: f32) -> Result<()> {
        self.controls.set_band_value_all(band, value)
    }

    /// See [`EqControls::reset_to_flat`]
    pub fn reset_to_flat(&mut self) {
        self.controls.reset_to_flat();
    }

    /// See [`EqControls::apply_settings`]
    pub fn apply_settings(&mut self, settings: &EqSettings) -> Result<()> {
        self.controls.apply_settings(settings)
    }
}

impl Deref for ControlsMut<'_> {
    type Target = EqControls;

    fn deref(&self) -> &EqControls {
        self.controls
    }
}
