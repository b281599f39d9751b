//! Buffered decode → filter → encode pipeline
//!
//! `EqualizerStream` pulls raw PCM from a `ByteSource`, runs it through the
//! codec and the filter bank in blocks, and serves the filtered bytes through
//! the same read/skip/available/close contract.

mod buffer;
mod stream;

pub use stream::{EqualizerStream, DEFAULT_BUFFER_SIZE};
