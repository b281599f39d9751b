/// Pull-based equalizer stream
use super::buffer::Window;
use crate::codec::SampleCodec;
use crate::controls::{ControlsMut, EqControls};
use crate::filter_bank::FilterBank;
use grapheq_core::{ByteSource, EqError, Result, StreamConfig};
use std::io;
use tracing::{debug, trace, warn};

/// Capacity of each pipeline buffer (bytes for input and output, samples for
/// the work buffer)
pub const DEFAULT_BUFFER_SIZE: usize = 65_536;

/// Equalizer over an upstream PCM byte source
///
/// A read that finds fewer buffered bytes than requested runs exactly one
/// refill cycle:
/// 1. **Refill**: top up the input buffer from upstream, looping over short
///    reads until it is full or upstream reports end of stream
/// 2. **Filter**: decode whole frames, run the filter bank, encode into the
///    output buffer (bounded by its free space)
/// 3. **Serve**: copy out `min(buffered, requested)` bytes
///
/// Surplus output stays buffered for the next call.
///
/// # Example
///
/// ```rust
/// use grapheq_core::{ReaderSource, StreamConfig};
/// use grapheq_dsp::EqualizerStream;
/// use std::io::Cursor;
///
/// let pcm = vec![0u8; 4096];
/// let config = StreamConfig::from_raw(44_100, 2, true, 16, false, 10).unwrap();
/// let mut eq = EqualizerStream::new(ReaderSource::new(Cursor::new(pcm)), config).unwrap();
///
/// eq.controls_mut().set_band_db(0, 0, 6.0).unwrap();
///
/// let mut buf = [0u8; 1024];
/// let n = eq.read(&mut buf).unwrap();
/// assert_eq!(n, 1024);
/// ```
#[derive(Debug)]
pub struct EqualizerStream<S> {
    source: S,
    config: StreamConfig,
    codec: SampleCodec,
    filter: FilterBank,
    input: Window<u8>,
    work: Box<[i32]>,
    output: Window<u8>,
}

impl<S: ByteSource> EqualizerStream<S> {
    /// Create an equalizer stream with the default buffer size
    ///
    /// # Errors
    /// Returns `EqError::UnsupportedFormat` if the configuration has no filter
    /// bank.
    pub fn new(source: S, config: StreamConfig) -> Result<Self> {
        Self::with_capacity(source, config, DEFAULT_BUFFER_SIZE)
    }

    /// Create an equalizer stream with a custom buffer capacity
    ///
    /// # Errors
    /// Returns `EqError::InvalidInput` if `capacity` cannot hold one frame.
    pub fn with_capacity(source: S, config: StreamConfig, capacity: usize) -> Result<Self> {
        if capacity < config.frame_bytes() {
            return Err(EqError::invalid_input(format!(
                "buffer capacity {} is smaller than one {}-byte frame",
                capacity,
                config.frame_bytes()
            )));
        }

        let filter = FilterBank::from_config(&config)?;
        debug!("Equalizer stream: {} ({} byte buffers)", config, capacity);

        Ok(Self {
            source,
            codec: SampleCodec::from_config(&config),
            config,
            filter,
            input: Window::with_capacity(capacity),
            work: vec![0; capacity].into_boxed_slice(),
            output: Window::with_capacity(capacity),
        })
    }

    /// Check a raw format without constructing a stream
    pub fn is_supported(rate_hz: u32, channels: u16, bits: u16, bands: usize) -> bool {
        StreamConfig::is_supported(rate_hz, channels, bits, bands)
    }

    /// Stream configuration
    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// Gain controls
    pub fn controls(&self) -> &EqControls {
        self.filter.controls()
    }

    /// Mutable gain controls
    ///
    /// Changes apply from the next filtered block; bytes already sitting in the
    /// output buffer keep the gains they were filtered with.
    pub fn controls_mut(&mut self) -> ControlsMut<'_> {
        self.filter.controls_mut()
    }

    /// The filter bank
    pub fn filter_bank(&self) -> &FilterBank {
        &self.filter
    }

    /// Centre frequency of a band in Hz
    pub fn band_frequency(&self, band: usize) -> Option<f32> {
        self.filter.band_frequency(band)
    }

    /// Zero the filter history, e.g. after repositioning the upstream source
    pub fn clean_history(&mut self) {
        self.filter.clean_history();
    }

    /// Read filtered bytes
    ///
    /// Returns the number of bytes copied into `buf`. `Ok(0)` for a non-empty
    /// `buf` means end of stream: upstream is exhausted and nothing is buffered.
    ///
    /// # Errors
    /// Upstream I/O errors are returned unchanged; `EqError::UnexpectedState`
    /// if a refill with upstream still open produced no output.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        if self.output.len() < buf.len() && !self.refill()? {
            return Ok(0);
        }

        let n = self.output.len().min(buf.len());
        buf[..n].copy_from_slice(&self.output.filled()[..n]);
        self.output.consume(n);
        Ok(n)
    }

    /// Read a single filtered byte, `None` at end of stream
    pub fn read_byte(&mut self) -> Result<Option<u8>> {
        if self.output.is_empty() && !self.refill()? {
            return Ok(None);
        }

        let byte = self.output.filled()[0];
        self.output.consume(1);
        Ok(Some(byte))
    }

    /// Skip over up to `n` bytes
    ///
    /// Discards buffered output first, then buffered (unfiltered) input, and
    /// hands the rest to the upstream source. Returns the number of bytes
    /// actually skipped, which is short only at end of stream. Filter history
    /// is kept; call `clean_history` if the skip should not ring through.
    ///
    /// # Errors
    /// Upstream I/O errors are returned unchanged.
    pub fn skip(&mut self, n: u64) -> Result<u64> {
        let buffered_out = self.output.len() as u64;
        if n <= buffered_out {
            self.output.consume(n as usize);
            return Ok(n);
        }

        let mut skipped = buffered_out;
        self.output.clear();
        let remaining = n - buffered_out;

        let buffered_in = self.input.len() as u64;
        if remaining <= buffered_in {
            self.input.consume(remaining as usize);
            return Ok(skipped + remaining);
        }

        skipped += buffered_in;
        self.input.clear();

        let upstream = self.source.skip(remaining - buffered_in)?;
        debug!(
            "Skipped {} buffered bytes, {} of {} upstream",
            skipped,
            upstream,
            remaining - buffered_in
        );
        Ok(skipped + upstream)
    }

    /// Bytes readable without blocking: exactly the buffered output
    pub fn available(&self) -> usize {
        self.output.len()
    }

    /// Marking is not supported; this does nothing
    pub fn mark(&mut self, _read_limit: usize) {}

    /// Always `false`
    pub fn mark_supported(&self) -> bool {
        false
    }

    /// Always fails: mark/reset is not supported
    pub fn reset(&mut self) -> Result<()> {
        Err(EqError::not_supported("mark/reset"))
    }

    /// Close the upstream source
    ///
    /// # Errors
    /// Upstream I/O errors are returned unchanged.
    pub fn close(&mut self) -> Result<()> {
        debug!("Closing equalizer stream");
        self.source.close()?;
        Ok(())
    }

    /// Get a reference to the upstream source
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the upstream source
    ///
    /// Reading from it directly bypasses the equalizer and desynchronises the
    /// buffered bytes.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwrap the upstream source, dropping any buffered bytes
    pub fn into_inner(self) -> S {
        self.source
    }

    /// One refill + filter cycle
    ///
    /// Returns `false` when there is no output and upstream is exhausted.
    fn refill(&mut self) -> Result<bool> {
        let eof = self.fill_input()?;
        self.fill_output();

        if !self.output.is_empty() {
            return Ok(true);
        }
        if eof {
            trace!(
                "End of stream ({} trailing bytes short of a frame)",
                self.input.len()
            );
            return Ok(false);
        }

        warn!(
            "Refill produced no output: {} input bytes buffered, upstream open",
            self.input.len()
        );
        Err(EqError::unexpected_state(format!(
            "no output after refill with {} input bytes and upstream open",
            self.input.len()
        )))
    }

    /// Top up the input buffer; returns `true` if upstream reported end of stream
    fn fill_input(&mut self) -> Result<bool> {
        self.input.compact();

        let mut pulled = 0;
        let mut eof = false;
        while !self.input.is_full() {
            match self.source.read(self.input.spare_mut()) {
                Ok(0) => {
                    eof = true;
                    break;
                }
                Ok(n) => {
                    self.input.commit(n);
                    pulled += n;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }

        trace!("Pulled {} bytes from upstream (eof: {})", pulled, eof);
        Ok(eof)
    }

    /// Filter as many whole frames as fit into the output buffer
    fn fill_output(&mut self) {
        self.output.compact();

        let frame = self.config.frame_bytes();
        let budget = self.output.spare_len().min(self.input.len());
        let budget = budget - budget % frame;
        if budget == 0 {
            return;
        }

        let samples = self
            .codec
            .decode(&self.input.filled()[..budget], &mut self.work);
        self.input.consume(samples * self.codec.bytes_per_sample());

        self.filter.process(&mut self.work[..samples]);

        let written = self
            .codec
            .encode(&self.work[..samples], self.output.spare_mut());
        self.output.commit(written);

        trace!("Filtered {} samples into {} bytes", samples, written);
    }
}

impl<S: ByteSource> io::Read for EqualizerStream<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        EqualizerStream::read(self, buf).map_err(Into::into)
    }
}

impl<S: ByteSource> ByteSource for EqualizerStream<S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        EqualizerStream::read(self, buf).map_err(Into::into)
    }

    fn skip(&mut self, n: u64) -> io::Result<u64> {
        EqualizerStream::skip(self, n).map_err(Into::into)
    }

    fn available(&self) -> usize {
        EqualizerStream::available(self)
    }

    fn close(&mut self) -> io::Result<()> {
        EqualizerStream::close(self).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grapheq_core::ReaderSource;
    use std::io::Cursor;

    fn stereo_16(data: Vec<u8>, capacity: usize) -> EqualizerStream<ReaderSource<Cursor<Vec<u8>>>> {
        let config = StreamConfig::from_raw(44_100, 2, true, 16, false, 10).unwrap();
        EqualizerStream::with_capacity(ReaderSource::new(Cursor::new(data)), config, capacity)
            .unwrap()
    }

    #[test]
    fn flat_stream_passes_bytes_through() {
        let data: Vec<u8> = (0..1000u32).map(|n| (n * 31 % 256) as u8).collect();
        let mut eq = stereo_16(data.clone(), 64);

        let mut out = Vec::new();
        let mut buf = [0u8; 37];
        loop {
            let n = eq.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            out.extend_from_slice(&buf[..n]);
        }

        assert_eq!(out, data);
    }

    #[test]
    fn one_refill_per_read() {
        let mut eq = stereo_16(vec![0u8; 256], 64);
        let mut buf = [0u8; 200];

        // Only one cycle runs, so at most one buffer's worth comes back
        assert_eq!(eq.read(&mut buf).unwrap(), 64);
        assert_eq!(eq.available(), 0);
    }

    #[test]
    fn surplus_is_kept_for_the_next_read() {
        let mut eq = stereo_16(vec![0u8; 256], 64);
        let mut buf = [0u8; 10];

        assert_eq!(eq.read(&mut buf).unwrap(), 10);
        assert_eq!(eq.available(), 54);
        assert_eq!(eq.read(&mut buf).unwrap(), 10);
        assert_eq!(eq.available(), 44);
    }

    #[test]
    fn empty_read_returns_zero_without_touching_upstream() {
        let mut eq = stereo_16(vec![1u8; 16], 64);
        assert_eq!(eq.read(&mut []).unwrap(), 0);
        assert_eq!(eq.get_ref().get_ref().position(), 0);
    }

    #[test]
    fn trailing_partial_frame_is_dropped_at_end_of_stream() {
        // The last 3 bytes are short of a 4-byte stereo frame
        let mut eq = stereo_16(vec![9u8; 11], 64);
        let mut buf = [0u8; 32];

        assert_eq!(eq.read(&mut buf).unwrap(), 8);
        assert_eq!(eq.read(&mut buf).unwrap(), 0);
        assert_eq!(eq.read(&mut buf).unwrap(), 0);
    }

    #[test]
    fn read_byte_walks_the_stream() {
        let mut eq = stereo_16(vec![1, 2, 3, 4], 64);
        assert_eq!(eq.read_byte().unwrap(), Some(1));
        assert_eq!(eq.read_byte().unwrap(), Some(2));
        assert_eq!(eq.read_byte().unwrap(), Some(3));
        assert_eq!(eq.read_byte().unwrap(), Some(4));
        assert_eq!(eq.read_byte().unwrap(), None);
        assert_eq!(eq.read_byte().unwrap(), None);
    }

    #[test]
    fn mark_reset_unsupported() {
        let mut eq = stereo_16(vec![], 64);
        eq.mark(100);
        assert!(!eq.mark_supported());
        assert!(matches!(eq.reset(), Err(EqError::NotSupported(_))));
    }

    #[test]
    fn capacity_must_hold_a_frame() {
        let config = StreamConfig::from_raw(48_000, 2, true, 24, false, 10).unwrap();
        let source = ReaderSource::new(Cursor::new(Vec::new()));
        assert!(matches!(
            EqualizerStream::with_capacity(source, config, 5),
            Err(EqError::InvalidInput(_))
        ));
    }

    #[test]
    fn close_reaches_upstream() {
        let mut eq = stereo_16(vec![0u8; 8], 64);
        eq.close().unwrap();
        assert!(eq.get_ref().is_closed());

        let mut buf = [0u8; 4];
        let err = eq.read(&mut buf).unwrap_err();
        assert!(matches!(err, EqError::Io(ref e) if e.kind() == io::ErrorKind::NotConnected));
    }
}
