//! rodio-backed sink: decodes the asset once and loops it forever.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use rodio::{Decoder, OutputStream, Sink};

use super::{AudioSink, PlaybackError};

/// Looping playback on the default output device.
pub struct RodioSink {
    // Declared before the stream so it is dropped first.
    sink: Sink,
    _stream: OutputStream,
}

impl RodioSink {
    /// Open the default device and queue `asset` on an endless loop, paused.
    pub fn open(asset: &Path) -> Result<Self, PlaybackError> {
        let file = File::open(asset).map_err(|source| PlaybackError::Asset {
            path: asset.to_path_buf(),
            source,
        })?;

        let (stream, handle) =
            OutputStream::try_default().map_err(|e| PlaybackError::Device(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| PlaybackError::Device(e.to_string()))?;

        let source = Decoder::new_looped(BufReader::new(file))
            .map_err(|e| PlaybackError::Decode(e.to_string()))?;

        sink.pause();
        sink.append(source);

        Ok(RodioSink {
            sink,
            _stream: stream,
        })
    }
}

impl AudioSink for RodioSink {
    fn play(&mut self) -> Result<(), PlaybackError> {
        if self.sink.empty() {
            return Err(PlaybackError::Rejected("nothing queued".into()));
        }
        self.sink.play();
        Ok(())
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn rewind(&mut self) -> Result<(), PlaybackError> {
        self.sink
            .try_seek(Duration::ZERO)
            .map_err(|e| PlaybackError::Seek(e.to_string()))
    }
}
