//! Domain types for the equalizer

pub mod stream;

pub use stream::{BandCount, BitDepth, Endianness, SampleRate, StreamConfig};
