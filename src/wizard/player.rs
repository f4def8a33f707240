//! Single-slot audio playback for the content preview.

use tracing::debug;

use crate::models::draft::LessonId;

/// The media engine that actually plays sound.
pub trait MediaEngine: Send {
    fn load(&mut self, source: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn set_muted(&mut self, muted: bool);
}

/// Engine for hosts without an output device; it only traces the calls.
pub struct NoopMediaEngine;

impl MediaEngine for NoopMediaEngine {
    fn load(&mut self, source: &str) {
        debug!("media engine: load {}", source);
    }

    fn play(&mut self) {
        debug!("media engine: play");
    }

    fn pause(&mut self) {
        debug!("media engine: pause");
    }

    fn set_muted(&mut self, muted: bool) {
        debug!("media engine: muted={}", muted);
    }
}

pub struct AudioPlayer {
    engine: Box<dyn MediaEngine>,
    current: Option<LessonId>,
    playing: bool,
    muted: bool,
}

impl AudioPlayer {
    pub fn new(engine: Box<dyn MediaEngine>) -> Self {
        Self {
            engine,
            current: None,
            playing: false,
            muted: false,
        }
    }

    pub fn current(&self) -> Option<LessonId> {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_playing_lesson(&self, lesson: LessonId) -> bool {
        self.playing && self.current == Some(lesson)
    }

    /// Play/pause for the current target, otherwise switch to `lesson`.
    pub fn toggle(&mut self, lesson: LessonId, source: &str) {
        if self.current == Some(lesson) {
            if self.playing {
                self.engine.pause();
            } else {
                self.engine.play();
            }
            self.playing = !self.playing;
            return;
        }

        self.engine.load(source);
        self.engine.play();
        self.current = Some(lesson);
        self.playing = true;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.engine.set_muted(self.muted);
    }

    /// The engine reached the end of the track. The target is kept.
    pub fn ended(&mut self) {
        self.playing = false;
    }

    /// Drops the current target, pausing it first if needed.
    pub fn stop(&mut self) {
        if self.playing {
            self.engine.pause();
        }
        self.playing = false;
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_target_toggles_play_pause() {
        let lesson = LessonId::new();
        let mut player = AudioPlayer::new(Box::new(NoopMediaEngine));

        player.toggle(lesson, "https://cdn.example/intro.mp3");
        assert!(player.is_playing_lesson(lesson));

        player.toggle(lesson, "https://cdn.example/intro.mp3");
        assert!(!player.is_playing());
        assert_eq!(player.current(), Some(lesson));
    }

    #[test]
    fn test_ended_keeps_target() {
        let lesson = LessonId::new();
        let mut player = AudioPlayer::new(Box::new(NoopMediaEngine));
        player.toggle(lesson, "a.mp3");
        player.ended();
        assert!(!player.is_playing());
        assert_eq!(player.current(), Some(lesson));
    }

    #[test]
    fn test_mute_is_independent_of_playback() {
        let mut player = AudioPlayer::new(Box::new(NoopMediaEngine));
        player.toggle_mute();
        assert!(player.is_muted());
        assert!(!player.is_playing());
        player.toggle_mute();
        assert!(!player.is_muted());
    }
}
