//! Graphic Equalizer WAV Support
//!
//! Runs PCM WAV files through the streaming equalizer. The header is parsed
//! with `hound`; the data chunk is streamed through `EqualizerStream` without
//! decoding it up front.
//!
//! WAV stores 8-bit samples unsigned and wider samples signed little-endian,
//! so the stream configuration follows from the header alone.
//!
//! # Example
//!
//! ```rust,no_run
//! use grapheq_wav::WavEqualizer;
//! use std::fs::File;
//! use std::io::BufWriter;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut eq = WavEqualizer::open("/music/track.wav", 10)?;
//! eq.controls_mut().set_band_value_all(0, 0.4)?; // 31 Hz
//! eq.controls_mut().set_band_value_all(1, 0.2)?; // 62 Hz
//!
//! let frames = eq.write_wav(BufWriter::new(File::create("/music/track-eq.wav")?))?;
//! println!("Equalized {} frames", frames);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

use grapheq_core::{EqError, ReaderSource, Result, StreamConfig};
use grapheq_dsp::{ControlsMut, EqControls, EqualizerStream, SampleCodec};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, Take, Write};
use std::path::Path;
use tracing::debug;

/// Equalizer over the data chunk of a WAV stream
pub struct WavEqualizer<R: Read> {
    spec: WavSpec,
    frames: u64,
    stream: EqualizerStream<ReaderSource<Take<R>>>,
}

impl WavEqualizer<BufReader<File>> {
    /// Open a WAV file
    ///
    /// # Errors
    /// Returns `EqError::Io` if the file cannot be read and
    /// `EqError::UnsupportedFormat` for headers the equalizer cannot handle.
    pub fn open(path: impl AsRef<Path>, bands: usize) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening WAV file: {}", path.display());
        Self::new(BufReader::new(File::open(path)?), bands)
    }
}

impl<R: Read> WavEqualizer<R> {
    /// Parse the WAV header and set up an equalizer over the data chunk
    ///
    /// # Errors
    /// Returns `EqError::UnsupportedFormat` for float samples, unsupported
    /// rates, widths or channel counts, or a band count with no table at this
    /// rate.
    pub fn new(reader: R, bands: usize) -> Result<Self> {
        let wav = WavReader::new(HeaderCapture::new(reader)).map_err(wav_error)?;
        let spec = wav.spec();
        let config = stream_config(&spec, bands)?;

        let frames = u64::from(wav.duration());
        let (reader, header) = wav.into_inner().into_parts();
        check_packed(&header, &config)?;

        let data_bytes = frames * config.frame_bytes() as u64;
        let source = ReaderSource::new(reader.take(data_bytes));
        let stream = EqualizerStream::new(source, config)?;

        debug!(
            "WAV equalizer: {} Hz, {} channels, {} bit, {} frames, {} bands",
            spec.sample_rate, spec.channels, spec.bits_per_sample, frames, bands
        );

        Ok(Self {
            spec,
            frames,
            stream,
        })
    }

    /// Check whether a WAV header can be equalized with `bands` bands
    pub fn is_supported(spec: &WavSpec, bands: usize) -> bool {
        spec.sample_format == SampleFormat::Int
            && StreamConfig::is_supported(spec.sample_rate, spec.channels, spec.bits_per_sample, bands)
    }

    /// The WAV header
    pub fn spec(&self) -> WavSpec {
        self.spec
    }

    /// Stream configuration derived from the header
    pub fn config(&self) -> &StreamConfig {
        self.stream.config()
    }

    /// Length of the data chunk in frames
    pub fn frame_length(&self) -> u64 {
        self.frames
    }

    /// Gain controls
    pub fn controls(&self) -> &EqControls {
        self.stream.controls()
    }

    /// Mutable gain controls
    pub fn controls_mut(&mut self) -> ControlsMut<'_> {
        self.stream.controls_mut()
    }

    /// Read filtered data-chunk bytes; `Ok(0)` at the end of the chunk
    ///
    /// # Errors
    /// Returns `EqError::Io` on read failure.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.stream.read(buf)
    }

    /// Skip up to `n` bytes of the data chunk
    ///
    /// # Errors
    /// Returns `EqError::Io` on read failure.
    pub fn skip(&mut self, n: u64) -> Result<u64> {
        self.stream.skip(n)
    }

    /// Bytes readable without touching the underlying reader
    pub fn available(&self) -> usize {
        self.stream.available()
    }

    /// Close the underlying reader; later reads fail
    ///
    /// # Errors
    /// Returns `EqError::Io` if closing fails.
    pub fn close(&mut self) -> Result<()> {
        self.stream.close()
    }

    /// The underlying equalizer stream, yielding filtered data-chunk bytes
    pub fn stream_mut(&mut self) -> &mut EqualizerStream<ReaderSource<Take<R>>> {
        &mut self.stream
    }

    /// Unwrap into the equalizer stream
    pub fn into_stream(self) -> EqualizerStream<ReaderSource<Take<R>>> {
        self.stream
    }

    /// Equalize the rest of the data chunk into a new WAV stream
    ///
    /// The output keeps the input header's format. Returns the number of
    /// frames written.
    ///
    /// # Errors
    /// Returns `EqError::Io` on read or write failure.
    pub fn write_wav<W: Write + Seek>(mut self, writer: W) -> Result<u64> {
        let config = *self.stream.config();
        let codec = SampleCodec::from_config(&config);
        let width = codec.bytes_per_sample();

        let mut wav = WavWriter::new(writer, self.spec).map_err(wav_error)?;
        let mut bytes = vec![0u8; config.frame_bytes() * 4_096];
        let mut samples = vec![0i32; bytes.len() / width];
        let mut pending = 0;
        let mut written = 0u64;

        loop {
            let n = self.stream.read(&mut bytes[pending..])?;
            if n == 0 {
                break;
            }
            pending += n;

            let count = codec.decode(&bytes[..pending], &mut samples);
            for &sample in &samples[..count] {
                wav.write_sample(sample).map_err(wav_error)?;
            }
            written += count as u64;

            // Carry a split sample over to the next read
            let used = count * width;
            bytes.copy_within(used..pending, 0);
            pending -= used;
        }

        wav.finalize().map_err(wav_error)?;

        let frames = written / u64::from(config.channels());
        debug!("Wrote {} equalized frames", frames);
        Ok(frames)
    }

    /// Equalize the rest of the data chunk into a WAV file at `path`
    ///
    /// # Errors
    /// Returns `EqError::Io` if the file cannot be created or written.
    pub fn write_wav_file(self, path: impl AsRef<Path>) -> Result<u64> {
        let file = File::create(path.as_ref())?;
        self.write_wav(BufWriter::new(file))
    }
}

/// Stream configuration for a WAV header
fn stream_config(spec: &WavSpec, bands: usize) -> Result<StreamConfig> {
    if spec.sample_format != SampleFormat::Int {
        return Err(EqError::unsupported("floating-point WAV samples"));
    }

    // 8-bit WAV is unsigned; wider samples are signed
    let signed = spec.bits_per_sample != 8;
    StreamConfig::from_raw(
        spec.sample_rate,
        spec.channels,
        signed,
        spec.bits_per_sample,
        false,
        bands,
    )
}

/// Reader that keeps a copy of everything read through it
///
/// `hound` stops right after the data chunk header, so the copy is exactly
/// the file header.
struct HeaderCapture<R> {
    inner: R,
    header: Vec<u8>,
}

impl<R: Read> HeaderCapture<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            header: Vec::new(),
        }
    }

    fn into_parts(self) -> (R, Vec<u8>) {
        (self.inner, self.header)
    }
}

impl<R: Read> Read for HeaderCapture<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.header.extend_from_slice(&buf[..n]);
        Ok(n)
    }
}

/// `block_align` from the fmt chunk of a RIFF/WAVE header
fn block_align(header: &[u8]) -> Option<u16> {
    let mut pos = 12;
    while pos + 8 <= header.len() {
        let id = &header[pos..pos + 4];
        let size = u32::from_le_bytes(header[pos + 4..pos + 8].try_into().ok()?) as usize;
        let body = pos + 8;

        if id == b"fmt " {
            let field = header.get(body + 12..body + 14)?;
            return Some(u16::from_le_bytes([field[0], field[1]]));
        }

        // Chunks are padded to an even length
        pos = body + size + (size & 1);
    }
    None
}

/// Reject samples stored in containers wider than their valid bits
///
/// WAVE_FORMAT_EXTENSIBLE allows e.g. 24 valid bits in 4-byte containers;
/// the codec only reads packed samples.
fn check_packed(header: &[u8], config: &StreamConfig) -> Result<()> {
    let align = block_align(header)
        .ok_or_else(|| EqError::invalid_input("WAV header has no fmt chunk"))?;

    if usize::from(align) != config.frame_bytes() {
        return Err(EqError::unsupported(format!(
            "{}-bit samples in {}-byte containers",
            config.bit_depth().bits(),
            usize::from(align) / usize::from(config.channels())
        )));
    }
    Ok(())
}

fn wav_error(err: hound::Error) -> EqError {
    match err {
        hound::Error::IoError(e) => EqError::Io(e),
        unsupported @ (hound::Error::Unsupported | hound::Error::InvalidSampleFormat) => {
            EqError::unsupported(unsupported.to_string())
        }
        other => EqError::invalid_input(other.to_string()),
    }
}
