use serde::Deserialize;
use tracing::debug;

use crate::error::WizardError;
use crate::models::draft::{ContentChannel, LessonField, ScheduleField};
use crate::wizard::CourseWizard;

/// One user action on an open wizard, as sent by the host view.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum WizardCommand {
    SetTitle { value: String },
    SetDescription { value: String },
    SetSectionTitle { section: usize, value: String },
    AddSection,
    RemoveSection { section: usize },
    AddLesson { section: usize },
    RemoveLesson { section: usize, lesson: usize },
    SetLessonField {
        section: usize,
        lesson: usize,
        field: LessonField,
        value: String,
    },
    ToggleLessonEnabled { section: usize, lesson: usize },
    SetLessonContent {
        section: usize,
        lesson: usize,
        channel: ContentChannel,
        value: String,
    },
    SetSchedule { field: ScheduleField, value: String },
    Next,
    Previous,
    GoTo { step: usize },
    TogglePreview,
    PlayAudio { section: usize, lesson: usize },
    ToggleMute,
    PlaybackEnded,
    Undo,
}

impl CourseWizard {
    pub fn apply_command(&mut self, command: WizardCommand) -> Result<(), WizardError> {
        debug!("applying wizard command {:?}", command);
        match command {
            WizardCommand::SetTitle { value } => self.set_title(&value),
            WizardCommand::SetDescription { value } => self.set_description(&value),
            WizardCommand::SetSectionTitle { section, value } => {
                self.set_section_title(section, &value)
            }
            WizardCommand::AddSection => self.add_section(),
            WizardCommand::RemoveSection { section } => self.remove_section(section),
            WizardCommand::AddLesson { section } => self.add_lesson(section),
            WizardCommand::RemoveLesson { section, lesson } => self.remove_lesson(section, lesson),
            WizardCommand::SetLessonField {
                section,
                lesson,
                field,
                value,
            } => self.set_lesson_field(section, lesson, field, &value),
            WizardCommand::ToggleLessonEnabled { section, lesson } => {
                self.toggle_lesson_enabled(section, lesson)
            }
            WizardCommand::SetLessonContent {
                section,
                lesson,
                channel,
                value,
            } => self.set_lesson_content(section, lesson, channel, &value),
            WizardCommand::SetSchedule { field, value } => self.set_schedule(field, &value),
            WizardCommand::Next => self.next().map(|_| ()),
            WizardCommand::Previous => self.previous().map(|_| ()),
            WizardCommand::GoTo { step } => self.go_to(step).map(|_| ()),
            WizardCommand::TogglePreview => self.toggle_preview().map(|_| ()),
            WizardCommand::PlayAudio { section, lesson } => self.play_audio(section, lesson),
            WizardCommand::ToggleMute => self.toggle_mute(),
            WizardCommand::PlaybackEnded => {
                self.playback_ended();
                Ok(())
            }
            WizardCommand::Undo => self.undo(),
        }
    }
}
