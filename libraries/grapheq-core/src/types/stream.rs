/// Stream configuration types
use crate::error::{EqError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sample rates the coefficient dataset covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SampleRate {
    /// 11.025 kHz
    Hz11025,
    /// 22.05 kHz
    Hz22050,
    /// 44.1 kHz (CD quality)
    Hz44100,
    /// 48 kHz (DVD quality)
    Hz48000,
}

impl SampleRate {
    /// All supported rates, ascending
    pub const ALL: [Self; 4] = [Self::Hz11025, Self::Hz22050, Self::Hz44100, Self::Hz48000];

    /// Look up a supported rate by its value in Hz
    pub fn from_hz(hz: u32) -> Option<Self> {
        match hz {
            11_025 => Some(Self::Hz11025),
            22_050 => Some(Self::Hz22050),
            44_100 => Some(Self::Hz44100),
            48_000 => Some(Self::Hz48000),
            _ => None,
        }
    }

    /// Get the sample rate as Hz
    pub fn as_hz(&self) -> u32 {
        match self {
            Self::Hz11025 => 11_025,
            Self::Hz22050 => 22_050,
            Self::Hz44100 => 44_100,
            Self::Hz48000 => 48_000,
        }
    }

    /// Band counts with coefficient tables at this rate
    ///
    /// The two low rates only carry a 10-band table.
    pub fn supported_bands(&self) -> &'static [BandCount] {
        match self {
            Self::Hz11025 | Self::Hz22050 => &[BandCount::Ten],
            Self::Hz44100 | Self::Hz48000 => &BandCount::ALL,
        }
    }

    /// Check whether a coefficient table exists for this rate and band count
    pub fn supports(&self, bands: BandCount) -> bool {
        self.supported_bands().contains(&bands)
    }
}

impl fmt::Display for SampleRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.as_hz())
    }
}

/// Number of equalizer bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BandCount {
    /// Octave bands
    Ten,
    /// Two-thirds octave bands
    Fifteen,
    /// Between third and two-thirds octave bands
    TwentyFive,
    /// Third-octave bands
    ThirtyOne,
}

impl BandCount {
    /// All supported band counts, ascending
    pub const ALL: [Self; 4] = [Self::Ten, Self::Fifteen, Self::TwentyFive, Self::ThirtyOne];

    /// Largest supported band count
    pub const MAX: usize = 31;

    /// Look up a supported band count
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            10 => Some(Self::Ten),
            15 => Some(Self::Fifteen),
            25 => Some(Self::TwentyFive),
            31 => Some(Self::ThirtyOne),
            _ => None,
        }
    }

    /// Get the number of bands
    pub fn count(&self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::TwentyFive => 25,
            Self::ThirtyOne => 31,
        }
    }
}

/// PCM sample width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitDepth {
    /// One byte per sample
    Eight,
    /// Two bytes per sample
    Sixteen,
    /// Three bytes per sample
    TwentyFour,
}

impl BitDepth {
    /// All supported widths, ascending
    pub const ALL: [Self; 3] = [Self::Eight, Self::Sixteen, Self::TwentyFour];

    /// Look up a supported width by bit count
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            8 => Some(Self::Eight),
            16 => Some(Self::Sixteen),
            24 => Some(Self::TwentyFour),
            _ => None,
        }
    }

    /// Bits per sample
    pub fn bits(&self) -> u16 {
        match self {
            Self::Eight => 8,
            Self::Sixteen => 16,
            Self::TwentyFour => 24,
        }
    }

    /// Bytes per sample
    pub fn bytes(&self) -> usize {
        usize::from(self.bits() / 8)
    }

    /// Smallest representable signed sample
    pub fn min_sample(&self) -> i32 {
        -(1 << (self.bits() - 1))
    }

    /// Largest representable signed sample
    pub fn max_sample(&self) -> i32 {
        (1 << (self.bits() - 1)) - 1
    }

    /// Offset between the unsigned and signed representations
    pub fn midpoint(&self) -> i32 {
        1 << (self.bits() - 1)
    }
}

/// Byte order of multi-byte samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Endianness {
    /// Least significant byte first (WAV)
    #[default]
    Little,
    /// Most significant byte first (AIFF, network order)
    Big,
}

impl Endianness {
    /// Build from a big-endian flag
    pub fn from_big_endian(big_endian: bool) -> Self {
        if big_endian {
            Self::Big
        } else {
            Self::Little
        }
    }

    /// Check for big-endian order
    pub fn is_big(&self) -> bool {
        matches!(self, Self::Big)
    }
}

/// Immutable description of the PCM stream an equalizer filters
///
/// Validated once at construction; every combination held by a `StreamConfig`
/// has a coefficient table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StreamConfigFields")]
pub struct StreamConfig {
    sample_rate: SampleRate,
    channels: u16,
    bit_depth: BitDepth,
    signed: bool,
    endianness: Endianness,
    bands: BandCount,
}

/// Unvalidated mirror of `StreamConfig` used while deserializing
#[derive(Deserialize)]
struct StreamConfigFields {
    sample_rate: SampleRate,
    channels: u16,
    bit_depth: BitDepth,
    signed: bool,
    endianness: Endianness,
    bands: BandCount,
}

impl TryFrom<StreamConfigFields> for StreamConfig {
    type Error = EqError;

    fn try_from(fields: StreamConfigFields) -> Result<Self> {
        Self::new(
            fields.sample_rate,
            fields.channels,
            fields.bit_depth,
            fields.signed,
            fields.endianness,
            fields.bands,
        )
    }
}

impl StreamConfig {
    /// Maximum number of interleaved channels
    pub const MAX_CHANNELS: u16 = 2;

    /// Create a validated stream configuration
    ///
    /// # Errors
    /// Returns `EqError::UnsupportedFormat` if the channel count is not 1 or 2,
    /// or if the sample rate has no table for the requested band count.
    pub fn new(
        sample_rate: SampleRate,
        channels: u16,
        bit_depth: BitDepth,
        signed: bool,
        endianness: Endianness,
        bands: BandCount,
    ) -> Result<Self> {
        if channels == 0 || channels > Self::MAX_CHANNELS {
            return Err(EqError::unsupported(format!(
                "{} channels (expected 1 or 2)",
                channels
            )));
        }

        if !sample_rate.supports(bands) {
            return Err(EqError::unsupported(format!(
                "{} bands at {} (only 10 bands below 44100 Hz)",
                bands.count(),
                sample_rate
            )));
        }

        Ok(Self {
            sample_rate,
            channels,
            bit_depth,
            signed,
            endianness,
            bands,
        })
    }

    /// Create a stream configuration from raw format numbers
    ///
    /// # Errors
    /// Returns `EqError::UnsupportedFormat` naming the first value outside the
    /// enumerated set.
    pub fn from_raw(
        rate_hz: u32,
        channels: u16,
        signed: bool,
        bits: u16,
        big_endian: bool,
        bands: usize,
    ) -> Result<Self> {
        let bit_depth = BitDepth::from_bits(bits)
            .ok_or_else(|| EqError::unsupported(format!("sample size {} bits", bits)))?;
        let sample_rate = SampleRate::from_hz(rate_hz)
            .ok_or_else(|| EqError::unsupported(format!("sample rate {} Hz", rate_hz)))?;
        let bands = BandCount::from_count(bands)
            .ok_or_else(|| EqError::unsupported(format!("{} bands", bands)))?;

        Self::new(
            sample_rate,
            channels,
            bit_depth,
            signed,
            Endianness::from_big_endian(big_endian),
            bands,
        )
    }

    /// Check a raw format without constructing anything
    pub fn is_supported(rate_hz: u32, channels: u16, bits: u16, bands: usize) -> bool {
        BitDepth::from_bits(bits).is_some()
            && (1..=Self::MAX_CHANNELS).contains(&channels)
            && matches!(
                (SampleRate::from_hz(rate_hz), BandCount::from_count(bands)),
                (Some(rate), Some(bands)) if rate.supports(bands)
            )
    }

    /// Sample rate
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// Number of interleaved channels
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Sample width
    pub fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    /// Whether samples are two's-complement signed
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Byte order of multi-byte samples
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Number of equalizer bands
    pub fn bands(&self) -> BandCount {
        self.bands
    }

    /// Bytes per sample
    pub fn bytes_per_sample(&self) -> usize {
        self.bit_depth.bytes()
    }

    /// Bytes per frame (one sample per channel)
    pub fn frame_bytes(&self) -> usize {
        self.bytes_per_sample() * usize::from(self.channels)
    }

    /// Calculate the byte rate (bytes per second)
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate.as_hz() * self.frame_bytes() as u32
    }
}

impl fmt::Display for StreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} ch, {}-bit {} {:?}-endian, {} bands",
            self.sample_rate,
            self.channels,
            self.bit_depth.bits(),
            if self.signed { "signed" } else { "unsigned" },
            self.endianness,
            self.bands.count()
        )
    }
}
