//! Graphic Equalizer DSP
//!
//! Streaming IIR graphic equalizer for raw PCM byte streams.
//!
//! This crate provides:
//! - Precomputed band-pass coefficient tables (10/15/25/31 bands at
//!   11025/22050/44100/48000 Hz)
//! - A per-channel IIR filter bank with preamp and per-band gains
//! - Linear and dB gain controls, persistable as JSON
//! - A sample codec for 8/16/24-bit, signed/unsigned, little/big-endian PCM
//! - `EqualizerStream`, a buffered pull pipeline wrapping any `ByteSource`
//!
//! # Example: Equalizing a PCM stream
//!
//! ```rust
//! use grapheq_core::{ReaderSource, StreamConfig};
//! use grapheq_dsp::EqualizerStream;
//! use std::io::{Cursor, Read};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pcm = vec![0u8; 8192]; // 16-bit stereo silence
//! let config = StreamConfig::from_raw(48_000, 2, true, 16, false, 15)?;
//! let mut eq = EqualizerStream::new(ReaderSource::new(Cursor::new(pcm)), config)?;
//!
//! // Bass boost on both channels
//! for channel in 0..2 {
//!     eq.controls_mut().set_band_db(0, channel, 9.0)?;
//!     eq.controls_mut().set_band_db(1, channel, 6.0)?;
//! }
//!
//! let mut out = Vec::new();
//! eq.read_to_end(&mut out)?;
//! assert_eq!(out.len(), 8192);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Example: Filtering decoded samples directly
//!
//! ```rust
//! use grapheq_core::{BandCount, SampleRate};
//! use grapheq_dsp::FilterBank;
//!
//! let mut bank = FilterBank::new(SampleRate::Hz44100, BandCount::Ten, 1).unwrap();
//! bank.controls_mut().set_band_value(5, 0, 0.5).unwrap();
//!
//! let mut samples = vec![1000i32; 512];
//! bank.process(&mut samples);
//! ```

#![forbid(unsafe_code)]

pub mod codec;
pub mod coefficients;
pub mod controls;
pub mod filter_bank;
pub mod pipeline;
pub mod settings;

pub use codec::SampleCodec;
pub use coefficients::BandCoefficients;
pub use controls::{
    band_db_to_linear, band_linear_to_db, preamp_db_to_linear, preamp_linear_to_db, ControlsMut,
    EqControls,
};
pub use filter_bank::FilterBank;
pub use pipeline::{EqualizerStream, DEFAULT_BUFFER_SIZE};
pub use settings::EqSettings;

pub use grapheq_core::{
    BandCount, BitDepth, ByteSource, Endianness, EqError, ReaderSource, Result, SampleRate,
    StreamConfig,
};
