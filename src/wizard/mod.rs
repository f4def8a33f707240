//! Course creation wizard.
//!
//! [`CourseWizard`] owns one [`CourseDraft`] for as long as it is open, walks
//! the four [`Step`]s and drives the preview audio slot. A finished draft is
//! handed to a [`WizardHost`] by value on submit; cancel only tells the host
//! to close.

pub mod command;
pub mod player;
pub mod step;
pub mod view;

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::error::WizardError;
use crate::models::draft::{ContentChannel, CourseDraft, LessonField, ScheduleField};

pub use command::WizardCommand;
pub use player::{AudioPlayer, MediaEngine, NoopMediaEngine};
pub use step::Step;
pub use view::WizardView;

pub const DEFAULT_UNDO_DEPTH: usize = 50;

/// Receives the outcome of a wizard session.
pub trait WizardHost {
    fn on_save(&mut self, draft: CourseDraft);
    fn on_close(&mut self);
}

/// Host that keeps whatever the wizard hands over.
#[derive(Debug, Default)]
pub struct DraftOutbox {
    pub saved: Option<CourseDraft>,
    pub closed: bool,
}

impl WizardHost for DraftOutbox {
    fn on_save(&mut self, draft: CourseDraft) {
        self.saved = Some(draft);
    }

    fn on_close(&mut self) {
        self.closed = true;
    }
}

pub struct CourseWizard {
    draft: Option<CourseDraft>,
    history: VecDeque<CourseDraft>,
    undo_depth: usize,
    step: Step,
    preview_mode: bool,
    player: AudioPlayer,
}

impl CourseWizard {
    pub fn new(engine: Box<dyn MediaEngine>) -> Self {
        info!("course wizard opened");
        Self {
            draft: Some(CourseDraft::new()),
            history: VecDeque::new(),
            undo_depth: DEFAULT_UNDO_DEPTH,
            step: Step::default(),
            preview_mode: false,
            player: AudioPlayer::new(engine),
        }
    }

    pub fn with_undo_depth(mut self, depth: usize) -> Self {
        self.undo_depth = depth;
        self.history.truncate(depth);
        self
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Result<&CourseDraft, WizardError> {
        self.draft.as_ref().ok_or(WizardError::WizardClosed)
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn preview_mode(&self) -> bool {
        self.preview_mode
    }

    pub fn player(&self) -> &AudioPlayer {
        &self.player
    }

    /// Position of the current audio target in the draft.
    pub fn current_audio(&self) -> Option<(usize, usize)> {
        let id = self.player.current()?;
        self.draft.as_ref()?.position_of(id)
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    pub fn is_muted(&self) -> bool {
        self.player.is_muted()
    }

    pub fn can_undo(&self) -> bool {
        self.is_open() && !self.history.is_empty()
    }

    // draft edits

    pub fn set_title(&mut self, title: &str) -> Result<(), WizardError> {
        self.apply(|d| Ok(d.with_title(title)))
    }

    pub fn set_description(&mut self, description: &str) -> Result<(), WizardError> {
        self.apply(|d| Ok(d.with_description(description)))
    }

    pub fn set_section_title(&mut self, section: usize, title: &str) -> Result<(), WizardError> {
        self.apply(|d| d.with_section_title(section, title))
    }

    pub fn add_section(&mut self) -> Result<(), WizardError> {
        self.apply(|d| Ok(d.with_section_added()))
    }

    pub fn remove_section(&mut self, section: usize) -> Result<(), WizardError> {
        self.apply(|d| d.without_section(section))
    }

    pub fn add_lesson(&mut self, section: usize) -> Result<(), WizardError> {
        self.apply(|d| d.with_lesson_added(section))
    }

    pub fn remove_lesson(&mut self, section: usize, lesson: usize) -> Result<(), WizardError> {
        self.apply(|d| d.without_lesson(section, lesson))
    }

    pub fn set_lesson_field(
        &mut self,
        section: usize,
        lesson: usize,
        field: LessonField,
        value: &str,
    ) -> Result<(), WizardError> {
        self.apply(|d| d.with_lesson_field(section, lesson, field, value))
    }

    pub fn toggle_lesson_enabled(&mut self, section: usize, lesson: usize) -> Result<(), WizardError> {
        self.apply(|d| d.with_lesson_toggled(section, lesson))
    }

    pub fn set_lesson_content(
        &mut self,
        section: usize,
        lesson: usize,
        channel: ContentChannel,
        value: &str,
    ) -> Result<(), WizardError> {
        self.apply(|d| d.with_lesson_content(section, lesson, channel, value))
    }

    /// Unparseable input keeps the previous value and is not an error.
    pub fn set_schedule(&mut self, field: ScheduleField, value: &str) -> Result<(), WizardError> {
        match self.apply(|d| d.with_schedule(field, value)) {
            Err(err) if err.is_recoverable_input() => {
                warn!("keeping previous {}: {}", field, err);
                Ok(())
            }
            other => other,
        }
    }

    /// Restores the draft as it was before the last successful edit.
    pub fn undo(&mut self) -> Result<(), WizardError> {
        self.draft()?;
        let previous = self.history.pop_back().ok_or(WizardError::NothingToUndo)?;
        self.draft = Some(previous);
        self.sync_player();
        Ok(())
    }

    // navigation

    pub fn next(&mut self) -> Result<Step, WizardError> {
        self.draft()?;
        self.step = self.step.next();
        Ok(self.step)
    }

    pub fn previous(&mut self) -> Result<Step, WizardError> {
        self.draft()?;
        self.step = self.step.previous();
        Ok(self.step)
    }

    pub fn go_to(&mut self, index: usize) -> Result<Step, WizardError> {
        self.draft()?;
        self.step = Step::from_index(index)?;
        Ok(self.step)
    }

    // preview and audio

    pub fn toggle_preview(&mut self) -> Result<bool, WizardError> {
        self.draft()?;
        self.preview_mode = !self.preview_mode;
        Ok(self.preview_mode)
    }

    pub fn play_audio(&mut self, section: usize, lesson: usize) -> Result<(), WizardError> {
        let target = self.draft()?.lesson(section, lesson)?;
        let (id, source) = (target.id, target.content.audio_url.clone());
        self.player.toggle(id, &source);
        Ok(())
    }

    pub fn toggle_mute(&mut self) -> Result<(), WizardError> {
        self.draft()?;
        self.player.toggle_mute();
        Ok(())
    }

    /// Signal from the media engine that the track finished.
    pub fn playback_ended(&mut self) {
        self.player.ended();
    }

    // terminal actions

    pub fn submit(&mut self, host: &mut dyn WizardHost) -> Result<(), WizardError> {
        self.draft()?;
        if !self.step.is_last() {
            return Err(WizardError::SubmitUnavailable { current: self.step });
        }
        let draft = self.close();
        info!(
            "course draft submitted: {:?} ({} sections, {} lessons)",
            draft.title,
            draft.sections.len(),
            draft.lesson_count()
        );
        host.on_save(draft);
        host.on_close();
        Ok(())
    }

    pub fn cancel(&mut self, host: &mut dyn WizardHost) -> Result<(), WizardError> {
        self.draft()?;
        self.close();
        info!("course wizard cancelled");
        host.on_close();
        Ok(())
    }

    fn close(&mut self) -> CourseDraft {
        self.player.stop();
        self.history.clear();
        self.preview_mode = false;
        self.draft.take().unwrap_or_default()
    }

    fn apply<F>(&mut self, edit: F) -> Result<(), WizardError>
    where
        F: FnOnce(&CourseDraft) -> Result<CourseDraft, WizardError>,
    {
        let next = edit(self.draft()?)?;
        if let Some(previous) = self.draft.replace(next) {
            self.remember(previous);
        }
        self.sync_player();
        Ok(())
    }

    fn remember(&mut self, previous: CourseDraft) {
        if self.undo_depth == 0 {
            return;
        }
        if self.history.len() == self.undo_depth {
            self.history.pop_front();
        }
        self.history.push_back(previous);
    }

    /// Stops playback whose lesson is no longer in the draft.
    fn sync_player(&mut self) {
        let Some(id) = self.player.current() else {
            return;
        };
        let still_there = self
            .draft
            .as_ref()
            .is_some_and(|d| d.position_of(id).is_some());
        if !still_there {
            debug!("audio target removed from draft, stopping playback");
            self.player.stop();
        }
    }
}
