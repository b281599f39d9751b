//! Test helpers and fixtures for equalizer integration tests
//!
//! Upstream sources here misbehave on purpose (short reads, interrupts,
//! failures) so the pipeline is exercised the way real streams exercise it.

use grapheq_core::{ByteSource, StreamConfig};
use grapheq_dsp::EqualizerStream;
use std::f64::consts::PI;
use std::io;

/// Source that hands out at most `chunk` bytes per read
pub struct ChunkedSource {
    data: Vec<u8>,
    pos: usize,
    chunk: usize,
    interrupt_every: Option<usize>,
    reads: usize,
    pub closed: bool,
}

impl ChunkedSource {
    pub fn new(data: Vec<u8>, chunk: usize) -> Self {
        Self {
            data,
            pos: 0,
            chunk,
            interrupt_every: None,
            reads: 0,
            closed: false,
        }
    }

    /// Fail every `n`th read with `ErrorKind::Interrupted`
    pub fn interrupting(mut self, n: usize) -> Self {
        self.interrupt_every = Some(n);
        self
    }

    /// Bytes handed out so far (reads plus skips)
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl ByteSource for ChunkedSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        if let Some(n) = self.interrupt_every {
            if self.reads % n == 0 {
                return Err(io::ErrorKind::Interrupted.into());
            }
        }

        let n = buf.len().min(self.chunk).min(self.data.len() - self.pos);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }

    fn skip(&mut self, n: u64) -> io::Result<u64> {
        let n = (n as usize).min(self.data.len() - self.pos);
        self.pos += n;
        Ok(n as u64)
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        Ok(())
    }
}

/// Source that yields `good` bytes and then fails every read
pub struct FailingSource {
    good: Vec<u8>,
    pos: usize,
}

impl FailingSource {
    pub fn new(good: Vec<u8>) -> Self {
        Self { good, pos: 0 }
    }
}

impl ByteSource for FailingSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos < self.good.len() {
            let n = buf.len().min(self.good.len() - self.pos);
            buf[..n].copy_from_slice(&self.good[self.pos..self.pos + n]);
            self.pos += n;
            return Ok(n);
        }
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "upstream went away"))
    }
}

/// Source that never produces data and never ends
pub struct StalledSource;

impl ByteSource for StalledSource {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::ErrorKind::WouldBlock.into())
    }
}

/// Integer sine wave, truncated toward zero
pub fn sine(frequency: f64, sample_rate: u32, amplitude: f64, len: usize) -> Vec<i32> {
    (0..len)
        .map(|n| (amplitude * (2.0 * PI * frequency * n as f64 / f64::from(sample_rate)).sin()) as i32)
        .collect()
}

/// Deterministic pseudo-random bytes (xorshift)
pub fn noise_bytes(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

/// 16-bit signed little-endian encoding
pub fn s16le(samples: &[i32]) -> Vec<u8> {
    samples
        .iter()
        .flat_map(|&s| (s as i16).to_le_bytes())
        .collect()
}

/// 16-bit signed little-endian decoding
pub fn from_s16le(bytes: &[u8]) -> Vec<i32> {
    bytes
        .chunks_exact(2)
        .map(|b| i32::from(i16::from_le_bytes([b[0], b[1]])))
        .collect()
}

/// Drain a stream with fixed-size reads
pub fn read_all<S: ByteSource>(eq: &mut EqualizerStream<S>, read_size: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut buf = vec![0u8; read_size];
    loop {
        let n = eq.read(&mut buf).expect("read failed");
        if n == 0 {
            return out;
        }
        out.extend_from_slice(&buf[..n]);
    }
}

/// A spread of supported formats: every sample layout at each rate
pub fn all_formats() -> Vec<StreamConfig> {
    let mut configs = Vec::new();
    for &(rate, bands) in &[(11_025, 10), (22_050, 10), (44_100, 31), (48_000, 25)] {
        for channels in 1..=2 {
            for bits in [8, 16, 24] {
                for signed in [true, false] {
                    for big_endian in [false, true] {
                        configs.push(
                            StreamConfig::from_raw(rate, channels, signed, bits, big_endian, bands)
                                .expect("supported format"),
                        );
                    }
                }
            }
        }
    }
    configs
}

/// Install a test subscriber once; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}
