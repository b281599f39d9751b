//! WAV file round trips through the equalizer
//!
//! Files are written to real temp directories with hound and read back the
//! same way, so header handling is exercised end to end.

use grapheq_core::EqError;
use grapheq_wav::WavEqualizer;
use hound::{SampleFormat, WavReader, WavSpec, WavSpecEx, WavWriter};
use std::f64::consts::PI;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn int_spec(sample_rate: u32, channels: u16, bits: u16) -> WavSpec {
    WavSpec {
        channels,
        sample_rate,
        bits_per_sample: bits,
        sample_format: SampleFormat::Int,
    }
}

/// Write a sine at `frequency` to every channel, scaled to half of full scale
fn write_sine(path: &Path, spec: WavSpec, frequency: f64, frames: usize) -> Vec<i32> {
    let amplitude = f64::from((1i32 << (spec.bits_per_sample - 1)) / 2);
    let mut writer = WavWriter::create(path, spec).expect("Failed to create WAV");
    let mut samples = Vec::with_capacity(frames * usize::from(spec.channels));

    for n in 0..frames {
        let t = n as f64 / f64::from(spec.sample_rate);
        let value = (amplitude * (2.0 * PI * frequency * t).sin()) as i32;
        for _ in 0..spec.channels {
            writer.write_sample(value).expect("Failed to write sample");
            samples.push(value);
        }
    }

    writer.finalize().expect("Failed to finalize WAV");
    samples
}

fn read_samples(path: &Path) -> (WavSpec, Vec<i32>) {
    let reader = WavReader::open(path).expect("Failed to open WAV");
    let spec = reader.spec();
    let samples = reader
        .into_samples::<i32>()
        .collect::<Result<Vec<_>, _>>()
        .expect("Failed to read samples");
    (spec, samples)
}

fn rms(samples: &[i32]) -> f64 {
    let sum: f64 = samples.iter().map(|&s| f64::from(s) * f64::from(s)).sum();
    (sum / samples.len() as f64).sqrt()
}

struct Files {
    _dir: TempDir,
    input: PathBuf,
    output: PathBuf,
}

fn files() -> Files {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    Files {
        input: dir.path().join("in.wav"),
        output: dir.path().join("out.wav"),
        _dir: dir,
    }
}

#[test]
fn flat_controls_copy_samples_exactly() {
    for bits in [8, 16, 24] {
        for channels in [1, 2] {
            let files = files();
            let spec = int_spec(44_100, channels, bits);
            let original = write_sine(&files.input, spec, 440.0, 5_000);

            let eq = WavEqualizer::open(&files.input, 10).unwrap();
            assert_eq!(eq.frame_length(), 5_000);
            assert_eq!(eq.write_wav_file(&files.output).unwrap(), 5_000);

            let (out_spec, samples) = read_samples(&files.output);
            assert_eq!(out_spec, spec);
            assert_eq!(samples, original, "{} bit, {} channels", bits, channels);
        }
    }
}

#[test]
fn lowering_preamp_attenuates_output() {
    let files = files();
    let spec = int_spec(48_000, 2, 16);
    let original = write_sine(&files.input, spec, 1_000.0, 24_000);

    let mut eq = WavEqualizer::open(&files.input, 10).unwrap();
    assert_eq!(eq.config().bands().count(), 10);
    eq.controls_mut().set_preamp_db(0, -12.0).unwrap();
    eq.controls_mut().set_preamp_db(1, -12.0).unwrap();
    eq.write_wav_file(&files.output).unwrap();

    let (_, samples) = read_samples(&files.output);
    assert_eq!(samples.len(), original.len());

    let before = rms(&original[4_800..]);
    let after = rms(&samples[4_800..]);
    assert!(after < before * 0.5, "rms {} -> {}", before, after);
}

#[test]
fn boosting_a_band_raises_its_tone() {
    let files = files();
    let spec = int_spec(44_100, 1, 16);
    let amplitude = 4_000.0;
    let mut writer = WavWriter::create(&files.input, spec).unwrap();
    let mut original = Vec::new();
    for n in 0..22_050 {
        let value = (amplitude * (2.0 * PI * 1_000.0 * f64::from(n) / 44_100.0).sin()) as i32;
        writer.write_sample(value as i16).unwrap();
        original.push(value);
    }
    writer.finalize().unwrap();

    let mut eq = WavEqualizer::open(&files.input, 10).unwrap();
    let band = (0..10)
        .find(|&b| eq.stream_mut().band_frequency(b) == Some(1_000.0))
        .unwrap();
    eq.controls_mut().set_band_db(band, 0, 12.0).unwrap();
    eq.write_wav_file(&files.output).unwrap();

    let (_, samples) = read_samples(&files.output);
    let gain = rms(&samples[11_025..]) / rms(&original[11_025..]);
    assert!(gain > 2.0, "gain {}", gain);
}

#[test]
fn unsupported_headers_are_rejected() {
    let files = files();

    // 96 kHz has no coefficient table
    write_sine(&files.input, int_spec(96_000, 2, 16), 440.0, 100);
    let err = WavEqualizer::open(&files.input, 10).err().unwrap();
    assert!(matches!(err, EqError::UnsupportedFormat(_)));

    // 31 bands need 44.1 or 48 kHz
    write_sine(&files.input, int_spec(22_050, 1, 16), 440.0, 100);
    assert!(WavEqualizer::open(&files.input, 10).is_ok());
    let err = WavEqualizer::open(&files.input, 31).err().unwrap();
    assert!(matches!(err, EqError::UnsupportedFormat(_)));

    // 32-bit integer samples
    write_sine(&files.input, int_spec(44_100, 2, 32), 440.0, 100);
    let err = WavEqualizer::open(&files.input, 10).err().unwrap();
    assert!(matches!(err, EqError::UnsupportedFormat(_)));
}

#[test]
fn padded_24_bit_containers_are_rejected() {
    let files = files();
    let spec_ex = WavSpecEx {
        spec: int_spec(44_100, 1, 24),
        bytes_per_sample: 4,
    };
    let out = BufWriter::new(File::create(&files.input).unwrap());
    let mut writer = WavWriter::new_with_spec_ex(out, spec_ex).unwrap();
    for sample in [1000, -1000, 2000, -2000] {
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();

    let err = WavEqualizer::open(&files.input, 10).err().unwrap();
    assert!(matches!(err, EqError::UnsupportedFormat(_)));
    assert!(err.to_string().contains("4-byte containers"));

    // the same samples packed in 3 bytes are accepted
    let mut writer = WavWriter::create(&files.input, int_spec(44_100, 1, 24)).unwrap();
    for sample in [1000, -1000, 2000, -2000] {
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();
    let eq = WavEqualizer::open(&files.input, 10).unwrap();
    assert_eq!(eq.frame_length(), 4);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = WavEqualizer::open(dir.path().join("absent.wav"), 10)
        .err()
        .unwrap();
    assert!(matches!(err, EqError::Io(_)));
}

#[test]
fn equalized_stream_reads_raw_bytes() {
    let files = files();
    let spec = int_spec(11_025, 2, 16);
    write_sine(&files.input, spec, 200.0, 1_000);

    let mut stream = WavEqualizer::open(&files.input, 10).unwrap().into_stream();
    let mut total = 0;
    let mut buf = [0u8; 1_000];
    loop {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        total += n;
    }

    assert_eq!(total, 4_000);
}
