//! Read model of the wizard for the host view.

use serde::Serialize;

use crate::error::WizardError;
use crate::models::draft::{ContentChannel, CourseDraft, DraftIssue, Lesson, LessonId, SectionId};
use crate::wizard::player::AudioPlayer;
use crate::wizard::step::Step;
use crate::wizard::CourseWizard;

#[derive(Debug, Clone, Serialize)]
pub struct StepView {
    pub index: usize,
    pub step: Step,
    pub title: &'static str,
    pub description: &'static str,
    pub reached: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AudioTarget {
    pub section: usize,
    pub lesson: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioView {
    pub current: Option<AudioTarget>,
    pub is_playing: bool,
    pub is_muted: bool,
}

/// One populated channel rendered read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { body: String },
    Video { url: String },
    Audio { url: String, file_name: String, playing: bool },
    Image { url: String, alt: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LessonPanel {
    Editable {
        text: String,
        video_url: String,
        audio_url: String,
        image_url: String,
    },
    Preview { blocks: Vec<ContentBlock> },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRow {
    pub id: LessonId,
    pub title: String,
    pub duration_label: String,
    pub enabled: bool,
    /// Title and duration inputs accept edits.
    pub editable: bool,
    pub panel: Option<LessonPanel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionRow {
    pub id: SectionId,
    pub title: String,
    pub lessons: Vec<LessonRow>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub step: Step,
    pub steps: Vec<StepView>,
    pub can_go_back: bool,
    pub can_submit: bool,
    pub can_undo: bool,
    pub preview_mode: bool,
    pub audio: AudioView,
    pub draft: CourseDraft,
    pub sections: Vec<SectionRow>,
    pub issues: Vec<DraftIssue>,
}

/// Last path segment of an audio URL, as shown next to the controls.
pub fn file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

pub fn render_lesson(lesson: &Lesson, preview: bool, player: &AudioPlayer) -> LessonPanel {
    let content = &lesson.content;
    if !preview {
        return LessonPanel::Editable {
            text: content.text.clone(),
            video_url: content.video_url.clone(),
            audio_url: content.audio_url.clone(),
            image_url: content.image_url.clone(),
        };
    }

    let blocks = ContentChannel::ALL
        .iter()
        .filter(|channel| !content.get(**channel).is_empty())
        .map(|channel| {
            let value = content.get(*channel).to_string();
            match channel {
                ContentChannel::Text => ContentBlock::Text { body: value },
                ContentChannel::VideoUrl => ContentBlock::Video { url: value },
                ContentChannel::AudioUrl => ContentBlock::Audio {
                    file_name: file_name(&value).to_string(),
                    playing: player.is_playing_lesson(lesson.id),
                    url: value,
                },
                ContentChannel::ImageUrl => ContentBlock::Image {
                    url: value,
                    alt: lesson.title.clone(),
                },
            }
        })
        .collect();

    LessonPanel::Preview { blocks }
}

impl CourseWizard {
    pub fn view(&self) -> Result<WizardView, WizardError> {
        let draft = self.draft()?;
        let current = self.step();

        let steps = Step::ALL
            .iter()
            .map(|step| StepView {
                index: step.index(),
                step: *step,
                title: step.title(),
                description: step.description(),
                reached: *step <= current,
            })
            .collect();

        let sections = draft
            .sections
            .iter()
            .map(|section| SectionRow {
                id: section.id,
                title: section.title.clone(),
                lessons: section
                    .lessons
                    .iter()
                    .map(|lesson| self.lesson_row(lesson))
                    .collect(),
            })
            .collect();

        Ok(WizardView {
            step: current,
            steps,
            can_go_back: current != Step::BasicInfo,
            can_submit: current.is_last(),
            can_undo: self.can_undo(),
            preview_mode: self.preview_mode(),
            audio: AudioView {
                current: self
                    .current_audio()
                    .map(|(section, lesson)| AudioTarget { section, lesson }),
                is_playing: self.is_playing(),
                is_muted: self.is_muted(),
            },
            draft: draft.clone(),
            sections,
            issues: draft.issues(),
        })
    }

    fn lesson_row(&self, lesson: &Lesson) -> LessonRow {
        // the structure step hides the content of disabled lessons
        let panel = match self.step() {
            Step::Structure if !lesson.enabled => None,
            Step::Structure | Step::Content => {
                Some(render_lesson(lesson, self.preview_mode(), self.player()))
            }
            Step::BasicInfo | Step::Schedule => None,
        };
        LessonRow {
            id: lesson.id,
            title: lesson.title.clone(),
            duration_label: lesson.duration_label.clone(),
            enabled: lesson.enabled,
            editable: lesson.enabled,
            panel,
        }
    }
}
