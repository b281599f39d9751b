//! PCM sample codec
//!
//! Converts raw PCM bytes (8, 16 or 24 bit, signed or unsigned, either byte
//! order) to integer samples centred on zero, and back.
//!
//! - Decoding consumes whole samples only; trailing bytes are left for the caller
//! - Unsigned samples are re-centred by their midpoint (e.g. 0x80 is silence at 8 bit)
//! - Encoding saturates to the width's signed range before packing, it never wraps
//!
//! Because of the re-centring, filtered output for unsigned streams does not
//! match filters that run on the raw unsigned values and clip the upper half;
//! silence stays silence and the full range survives a round trip.

use grapheq_core::{BitDepth, Endianness, StreamConfig};

/// Byte/sample converter for one PCM layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCodec {
    bit_depth: BitDepth,
    signed: bool,
    endianness: Endianness,
}

impl SampleCodec {
    /// Create a codec for a sample layout
    pub fn new(bit_depth: BitDepth, signed: bool, endianness: Endianness) -> Self {
        Self {
            bit_depth,
            signed,
            endianness,
        }
    }

    /// Create the codec a stream configuration describes
    pub fn from_config(config: &StreamConfig) -> Self {
        Self::new(config.bit_depth(), config.is_signed(), config.endianness())
    }

    /// Sample width
    pub fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    /// Bytes per encoded sample
    pub fn bytes_per_sample(&self) -> usize {
        self.bit_depth.bytes()
    }

    /// Saturate a sample to the representable range
    #[inline]
    pub fn clip(&self, sample: i32) -> i32 {
        sample.clamp(self.bit_depth.min_sample(), self.bit_depth.max_sample())
    }

    /// Decode as many whole samples as fit in both buffers
    ///
    /// Returns the number of samples written; `count * bytes_per_sample()`
    /// bytes of `bytes` were consumed.
    pub fn decode(&self, bytes: &[u8], samples: &mut [i32]) -> usize {
        let width = self.bytes_per_sample();
        let mut count = 0;

        for (raw, sample) in bytes.chunks_exact(width).zip(samples.iter_mut()) {
            *sample = self.decode_one(raw);
            count += 1;
        }

        count
    }

    /// Clip and encode as many samples as fit in `bytes`
    ///
    /// Returns the number of bytes written.
    pub fn encode(&self, samples: &[i32], bytes: &mut [u8]) -> usize {
        let width = self.bytes_per_sample();
        let mut written = 0;

        for (raw, &sample) in bytes.chunks_exact_mut(width).zip(samples) {
            self.encode_one(sample, raw);
            written += width;
        }

        written
    }

    #[inline]
    fn decode_one(&self, raw: &[u8]) -> i32 {
        let unsigned = match self.endianness {
            Endianness::Big => raw.iter().fold(0_i32, |acc, &b| (acc << 8) | i32::from(b)),
            Endianness::Little => raw
                .iter()
                .rev()
                .fold(0_i32, |acc, &b| (acc << 8) | i32::from(b)),
        };

        let midpoint = self.bit_depth.midpoint();
        match (self.signed, unsigned >= midpoint) {
            (false, _) => unsigned - midpoint,
            // Two's-complement unwrap
            (true, true) => unsigned - (midpoint << 1),
            (true, false) => unsigned,
        }
    }

    #[inline]
    fn encode_one(&self, sample: i32, raw: &mut [u8]) {
        let clipped = self.clip(sample);
        let midpoint = self.bit_depth.midpoint();
        let unsigned = match (self.signed, clipped < 0) {
            (false, _) => clipped + midpoint,
            (true, true) => clipped + (midpoint << 1),
            (true, false) => clipped,
        };

        let width = raw.len();
        for (n, byte) in raw.iter_mut().enumerate() {
            let shift = match self.endianness {
                Endianness::Big => 8 * (width - 1 - n),
                Endianness::Little => 8 * n,
            };
            *byte = ((unsigned >> shift) & 0xff) as u8;
        }
    }
}
