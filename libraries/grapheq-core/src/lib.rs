//! Graphic Equalizer Core
//!
//! Platform-agnostic types, traits, and error handling shared by the
//! equalizer crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Stream configuration**: `StreamConfig` and the enumerated sample rates,
//!   bit depths, byte orders and band counts the filter bank supports
//! - **Byte sources**: the `ByteSource` capability trait the pipeline pulls from,
//!   plus `ReaderSource` for anything implementing `std::io::Read`
//! - **Error handling**: unified `EqError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use grapheq_core::{BandCount, BitDepth, Endianness, SampleRate, StreamConfig};
//!
//! let config = StreamConfig::new(
//!     SampleRate::Hz44100,
//!     2,
//!     BitDepth::Sixteen,
//!     true,
//!     Endianness::Little,
//!     BandCount::Ten,
//! )
//! .unwrap();
//!
//! assert_eq!(config.frame_bytes(), 4);
//! assert!(StreamConfig::is_supported(44_100, 2, 16, 31));
//! assert!(!StreamConfig::is_supported(22_050, 2, 16, 31));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

pub use error::{EqError, Result};
pub use traits::{ByteSource, ReaderSource};
pub use types::{BandCount, BitDepth, Endianness, SampleRate, StreamConfig};
