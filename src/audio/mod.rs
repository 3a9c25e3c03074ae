//! Background audio and the mute flag.
//!
//! The channel owns one playback handle for its whole lifetime:
//! - acquired once in [`AudioChannel::activate`]
//! - started or paused whenever the mute flag changes
//! - paused, rewound and released on drop
//!
//! Playback failures never leave this module. They are logged and the quiz
//! carries on in silence.

#[cfg(feature = "audio")]
mod rodio_sink;

#[cfg(feature = "audio")]
pub use rodio_sink::RodioSink;

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::AudioConfig;

/// Why playback could not start or continue.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("cannot open audio asset {}", path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no usable audio output device: {0}")]
    Device(String),

    #[error("cannot decode audio asset: {0}")]
    Decode(String),

    #[error("playback rejected: {0}")]
    Rejected(String),

    #[error("cannot rewind playback: {0}")]
    Seek(String),
}

// ============================================================================
// SINKS
// ============================================================================

/// A looping, pausable playback handle.
///
/// `play` and `pause` must be idempotent: the channel calls them on every
/// flag change without tracking what the device is doing.
pub trait AudioSink {
    /// Start or resume from the current position.
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Stop without moving the position.
    fn pause(&mut self);

    /// Move the position back to the start.
    fn rewind(&mut self) -> Result<(), PlaybackError>;
}

impl<S: AudioSink + ?Sized> AudioSink for Box<S> {
    fn play(&mut self) -> Result<(), PlaybackError> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause()
    }

    fn rewind(&mut self) -> Result<(), PlaybackError> {
        (**self).rewind()
    }
}

/// Sink that accepts every command and makes no sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl AudioSink for SilentSink {
    fn play(&mut self) -> Result<(), PlaybackError> {
        Ok(())
    }

    fn pause(&mut self) {}

    fn rewind(&mut self) -> Result<(), PlaybackError> {
        Ok(())
    }
}

// ============================================================================
// MUTE FLAG
// ============================================================================

/// The mute flag. Pure data; toggling has no side effect by itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MuteState {
    muted: bool,
}

impl MuteState {
    pub fn new(muted: bool) -> Self {
        MuteState { muted }
    }

    pub fn is_muted(self) -> bool {
        self.muted
    }

    pub fn toggle(&mut self) {
        self.muted = !self.muted;
    }

    /// Indicator text for the header.
    pub fn label(self) -> &'static str {
        if self.muted { "Muted" } else { "Unmuted" }
    }
}

// ============================================================================
// CHANNEL
// ============================================================================

/// Mute flag plus the playback handle it drives.
pub struct AudioChannel<S: AudioSink> {
    mute: MuteState,
    handle: Option<S>,
}

impl<S: AudioSink> AudioChannel<S> {
    /// Acquire the handle and apply the initial flag.
    ///
    /// If acquisition fails the channel still works as a mute flag, just
    /// without sound.
    pub fn activate<F>(muted: bool, acquire: F) -> Self
    where
        F: FnOnce() -> Result<S, PlaybackError>,
    {
        let handle = match acquire() {
            Ok(sink) => {
                tracing::info!("background audio acquired");
                Some(sink)
            }
            Err(e) => {
                tracing::warn!(error = %e, "background audio unavailable");
                None
            }
        };

        let mut channel = AudioChannel {
            mute: MuteState::new(muted),
            handle,
        };
        channel.sync();
        channel
    }

    pub fn is_muted(&self) -> bool {
        self.mute.is_muted()
    }

    pub fn mute_state(&self) -> MuteState {
        self.mute
    }

    /// Whether a playback handle is held.
    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Flip the flag and re-run the playback effect. Returns the new flag.
    pub fn toggle_mute(&mut self) -> bool {
        self.mute.toggle();
        tracing::debug!(muted = self.mute.is_muted(), "mute toggled");
        self.sync();
        self.mute.is_muted()
    }

    /// Bring playback in line with the flag.
    fn sync(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };

        if self.mute.is_muted() {
            handle.pause();
        } else if let Err(e) = handle.play() {
            tracing::warn!(error = %e, "background audio playback rejected");
        }
    }
}

impl<S: AudioSink> Drop for AudioChannel<S> {
    fn drop(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.pause();
            if let Err(e) = handle.rewind() {
                tracing::debug!(error = %e, "rewind on teardown failed");
            }
            tracing::info!("background audio released");
        }
    }
}

impl<S: AudioSink> fmt::Debug for AudioChannel<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioChannel")
            .field("mute", &self.mute)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Channel type used by the application.
pub type BackgroundAudio = AudioChannel<Box<dyn AudioSink>>;

/// Open the background channel described by `config`.
///
/// Uses rodio when built with the `audio` feature and audio is enabled,
/// a silent sink otherwise.
pub fn open_background(config: &AudioConfig) -> BackgroundAudio {
    if !config.enabled {
        tracing::info!("audio disabled by configuration");
        return AudioChannel::activate(config.start_muted, || Ok(Box::new(SilentSink) as Box<dyn AudioSink>));
    }

    #[cfg(feature = "audio")]
    {
        let asset = config.asset.clone();
        AudioChannel::activate(config.start_muted, move || {
            RodioSink::open(&asset).map(|sink| Box::new(sink) as Box<dyn AudioSink>)
        })
    }

    #[cfg(not(feature = "audio"))]
    {
        tracing::info!(asset = %config.asset.display(), "built without the audio feature, playing silently");
        AudioChannel::activate(config.start_muted, || Ok(Box::new(SilentSink) as Box<dyn AudioSink>))
    }
}

// ============================================================================
// TESTS
// ============================================================================
