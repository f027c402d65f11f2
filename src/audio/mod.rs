//! Audio cues.
//!
//! The engine never touches an audio device; it drives an injected
//! [`AudioSink`] with fire-and-forget cues. The one piece of real behavior
//! lives in the [`AudioDirector`]: the flip cue plays pitched up and
//! schedules a pitch reset after half the clip length, and a new cue cancels
//! the pending reset. This is the only cancellable cooperative task in the
//! system.

use crate::session::Countdown;

/// Sound effect types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCue {
    /// A card flip started (or a loaded card was hidden).
    Flip,
    /// Two cards matched.
    Match,
    /// All pairs found.
    GameOver,
}

impl AudioCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioCue::Flip => "flip",
            AudioCue::Match => "match",
            AudioCue::GameOver => "game-over",
        }
    }
}

/// Where cues go. Implemented by the frontend; tests record, the default
/// discards.
pub trait AudioSink {
    /// Play a one-shot cue at the current pitch.
    fn play(&mut self, cue: AudioCue);

    /// Change the playback pitch for subsequent cues.
    fn set_pitch(&mut self, pitch: f32);
}

/// Sink that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&mut self, _cue: AudioCue) {}
    fn set_pitch(&mut self, _pitch: f32) {}
}

/// Drives the sink with the game's cue logic.
pub struct AudioDirector {
    sink: Box<dyn AudioSink>,
    pitch: f32,
    pitch_reset: Option<Countdown>,
    flip_cue_secs: f32,
}

impl AudioDirector {
    /// Wrap a sink. `flip_cue_secs` is the flip clip length; the pitch reset
    /// fires at half of it.
    #[must_use]
    pub fn new(sink: Box<dyn AudioSink>, flip_cue_secs: f32) -> Self {
        Self {
            sink,
            pitch: 1.0,
            pitch_reset: None,
            flip_cue_secs,
        }
    }

    /// Current playback pitch.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Play the flip cue pitched up and (re)schedule the pitch reset.
    ///
    /// A reset already in flight is cancelled and rescheduled.
    pub fn play_flip(&mut self) {
        self.set_pitch(2.0);
        self.sink.play(AudioCue::Flip);
        self.pitch_reset = Some(Countdown::new(self.flip_cue_secs / 2.0));
    }

    /// Play the match cue at normal pitch, cancelling any pending reset.
    pub fn play_match(&mut self) {
        self.play_normal(AudioCue::Match);
    }

    /// Play the game-over cue at normal pitch, cancelling any pending reset.
    pub fn play_game_over(&mut self) {
        self.play_normal(AudioCue::GameOver);
    }

    /// Advance the pitch-reset countdown.
    pub fn tick(&mut self, dt: f32) {
        let fired = self.pitch_reset.as_mut().is_some_and(|cd| cd.tick(dt));
        if fired {
            self.pitch_reset = None;
            self.set_pitch(1.0);
        }
    }

    fn play_normal(&mut self, cue: AudioCue) {
        self.pitch_reset = None;
        self.set_pitch(1.0);
        self.sink.play(cue);
    }

    fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
        self.sink.set_pitch(pitch);
    }
}
