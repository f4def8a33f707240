//! The course draft edited by the wizard.
//!
//! Every edit is a pure function from the current draft to a new one, so a
//! failed edit never leaves a half-applied draft behind and the previous value
//! stays available to the caller.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{IndexTarget, WizardError};

pub const DEFAULT_MAX_STUDENTS: u32 = 20;
pub const DEFAULT_PRICE: f64 = 35_000.0;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(Uuid);

impl SectionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SectionId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(Uuid);

impl LessonId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LessonId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    #[default]
    Text,
    Video,
    Quiz,
}

impl LessonKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LessonKind::Text => "text",
            LessonKind::Video => "video",
            LessonKind::Quiz => "quiz",
        }
    }
}

impl FromStr for LessonKind {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(LessonKind::Text),
            "video" => Ok(LessonKind::Video),
            "quiz" => Ok(LessonKind::Quiz),
            other => Err(WizardError::InvalidEnumValue {
                field: "kind",
                value: other.to_string(),
            }),
        }
    }
}

/// Editable scalar fields of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LessonField {
    Title,
    DurationLabel,
    Kind,
    Description,
}

/// One of the four content slots of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentChannel {
    Text,
    VideoUrl,
    AudioUrl,
    ImageUrl,
}

impl ContentChannel {
    /// Rendering order of the preview.
    pub const ALL: [ContentChannel; 4] = [
        ContentChannel::Text,
        ContentChannel::VideoUrl,
        ContentChannel::AudioUrl,
        ContentChannel::ImageUrl,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScheduleField {
    StartDate,
    EndDate,
    MaxStudents,
    Price,
}

impl fmt::Display for ScheduleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScheduleField::StartDate => "startDate",
            ScheduleField::EndDate => "endDate",
            ScheduleField::MaxStudents => "maxStudents",
            ScheduleField::Price => "price",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonContent {
    pub text: String,
    pub video_url: String,
    pub audio_url: String,
    pub image_url: String,
}

impl LessonContent {
    pub fn get(&self, channel: ContentChannel) -> &str {
        match channel {
            ContentChannel::Text => &self.text,
            ContentChannel::VideoUrl => &self.video_url,
            ContentChannel::AudioUrl => &self.audio_url,
            ContentChannel::ImageUrl => &self.image_url,
        }
    }

    fn slot_mut(&mut self, channel: ContentChannel) -> &mut String {
        match channel {
            ContentChannel::Text => &mut self.text,
            ContentChannel::VideoUrl => &mut self.video_url,
            ContentChannel::AudioUrl => &mut self.audio_url,
            ContentChannel::ImageUrl => &mut self.image_url,
        }
    }

    pub fn is_empty(&self) -> bool {
        ContentChannel::ALL.iter().all(|c| self.get(*c).is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub duration_label: String,
    pub kind: LessonKind,
    pub description: String,
    pub enabled: bool,
    pub content: LessonContent,
}

impl Lesson {
    /// An empty, enabled text lesson.
    pub fn new() -> Self {
        Self {
            id: LessonId::new(),
            title: String::new(),
            duration_label: String::new(),
            kind: LessonKind::Text,
            description: String::new(),
            enabled: true,
            content: LessonContent::default(),
        }
    }
}

impl Default for Lesson {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub lessons: Vec<Lesson>,
}

impl Section {
    /// An untitled section holding one default lesson.
    pub fn new() -> Self {
        Self {
            id: SectionId::new(),
            title: String::new(),
            lessons: vec![Lesson::new()],
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub max_students: u32,
    pub price: f64,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            max_students: DEFAULT_MAX_STUDENTS,
            price: DEFAULT_PRICE,
        }
    }
}

impl Schedule {
    fn set(&mut self, field: ScheduleField, value: &str) -> Result<(), WizardError> {
        let raw = value.trim();
        match field {
            ScheduleField::StartDate => self.start_date = parse_date(field, raw)?,
            ScheduleField::EndDate => self.end_date = parse_date(field, raw)?,
            ScheduleField::MaxStudents => {
                self.max_students = raw
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or_else(|| numeric_failure(field, value))?;
            }
            ScheduleField::Price => {
                self.price = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|p| p.is_finite() && *p >= 0.0)
                    .ok_or_else(|| numeric_failure(field, value))?;
            }
        }
        Ok(())
    }
}

fn parse_date(field: ScheduleField, raw: &str) -> Result<Option<NaiveDate>, WizardError> {
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| WizardError::InvalidDate {
            field,
            value: raw.to_string(),
        })
}

fn numeric_failure(field: ScheduleField, value: &str) -> WizardError {
    WizardError::NumericParseFailure {
        field,
        value: value.to_string(),
    }
}

/// Advisory findings on a draft. None of them block navigation or saving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum DraftIssue {
    MissingTitle,
    MissingDescription,
    UntitledLesson { section: usize, lesson: usize },
    EndsBeforeStart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub sections: Vec<Section>,
    pub schedule: Schedule,
}

impl Default for CourseDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseDraft {
    /// A fresh draft: one empty section containing one empty text lesson.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            sections: vec![Section::new()],
            schedule: Schedule::default(),
        }
    }

    pub fn section(&self, index: usize) -> Result<&Section, WizardError> {
        self.sections.get(index).ok_or(WizardError::InvalidIndex {
            target: IndexTarget::Section,
            index,
            len: self.sections.len(),
        })
    }

    pub fn lesson(&self, section: usize, lesson: usize) -> Result<&Lesson, WizardError> {
        let lessons = &self.section(section)?.lessons;
        lessons.get(lesson).ok_or(WizardError::InvalidIndex {
            target: IndexTarget::Lesson,
            index: lesson,
            len: lessons.len(),
        })
    }

    /// Current position of a lesson, if it is still part of the draft.
    pub fn position_of(&self, id: LessonId) -> Option<(usize, usize)> {
        self.sections.iter().enumerate().find_map(|(s, section)| {
            section
                .lessons
                .iter()
                .position(|lesson| lesson.id == id)
                .map(|l| (s, l))
        })
    }

    pub fn lesson_count(&self) -> usize {
        self.sections.iter().map(|s| s.lessons.len()).sum()
    }

    pub fn with_title(&self, title: impl Into<String>) -> CourseDraft {
        CourseDraft {
            title: title.into(),
            ..self.clone()
        }
    }

    pub fn with_description(&self, description: impl Into<String>) -> CourseDraft {
        CourseDraft {
            description: description.into(),
            ..self.clone()
        }
    }

    pub fn with_section_title(
        &self,
        section: usize,
        title: impl Into<String>,
    ) -> Result<CourseDraft, WizardError> {
        let title = title.into();
        self.edit_section(section, |s| {
            s.title = title;
            Ok(())
        })
    }

    pub fn with_section_added(&self) -> CourseDraft {
        let mut next = self.clone();
        next.sections.push(Section::new());
        next
    }

    pub fn without_section(&self, section: usize) -> Result<CourseDraft, WizardError> {
        self.section(section)?;
        if self.sections.len() == 1 {
            return Err(WizardError::LastSectionRequired);
        }
        let mut next = self.clone();
        next.sections.remove(section);
        Ok(next)
    }

    pub fn with_lesson_added(&self, section: usize) -> Result<CourseDraft, WizardError> {
        self.edit_section(section, |s| {
            s.lessons.push(Lesson::new());
            Ok(())
        })
    }

    pub fn without_lesson(&self, section: usize, lesson: usize) -> Result<CourseDraft, WizardError> {
        self.lesson(section, lesson)?;
        self.edit_section(section, |s| {
            if s.lessons.len() == 1 {
                return Err(WizardError::LastLessonRequired);
            }
            s.lessons.remove(lesson);
            Ok(())
        })
    }

    pub fn with_lesson_field(
        &self,
        section: usize,
        lesson: usize,
        field: LessonField,
        value: &str,
    ) -> Result<CourseDraft, WizardError> {
        self.edit_lesson(section, lesson, |l| {
            match field {
                LessonField::Title => l.title = value.to_string(),
                LessonField::DurationLabel => l.duration_label = value.to_string(),
                LessonField::Kind => l.kind = value.parse()?,
                LessonField::Description => l.description = value.to_string(),
            }
            Ok(())
        })
    }

    pub fn with_lesson_toggled(&self, section: usize, lesson: usize) -> Result<CourseDraft, WizardError> {
        self.edit_lesson(section, lesson, |l| {
            l.enabled = !l.enabled;
            Ok(())
        })
    }

    pub fn with_lesson_content(
        &self,
        section: usize,
        lesson: usize,
        channel: ContentChannel,
        value: &str,
    ) -> Result<CourseDraft, WizardError> {
        self.edit_lesson(section, lesson, |l| {
            *l.content.slot_mut(channel) = value.to_string();
            Ok(())
        })
    }

    /// Fails with `NumericParseFailure` or `InvalidDate` when the input does
    /// not parse; the caller keeps its current draft in that case.
    pub fn with_schedule(&self, field: ScheduleField, value: &str) -> Result<CourseDraft, WizardError> {
        let mut next = self.clone();
        next.schedule.set(field, value)?;
        Ok(next)
    }

    pub fn issues(&self) -> Vec<DraftIssue> {
        let mut issues = Vec::new();
        if self.title.trim().is_empty() {
            issues.push(DraftIssue::MissingTitle);
        }
        if self.description.trim().is_empty() {
            issues.push(DraftIssue::MissingDescription);
        }
        for (s, section) in self.sections.iter().enumerate() {
            for (l, lesson) in section.lessons.iter().enumerate() {
                if lesson.enabled && lesson.title.trim().is_empty() {
                    issues.push(DraftIssue::UntitledLesson { section: s, lesson: l });
                }
            }
        }
        if let (Some(start), Some(end)) = (self.schedule.start_date, self.schedule.end_date) {
            if end < start {
                issues.push(DraftIssue::EndsBeforeStart);
            }
        }
        issues
    }

    fn edit_section<F>(&self, section: usize, edit: F) -> Result<CourseDraft, WizardError>
    where
        F: FnOnce(&mut Section) -> Result<(), WizardError>,
    {
        self.section(section)?;
        let mut next = self.clone();
        edit(&mut next.sections[section])?;
        Ok(next)
    }

    fn edit_lesson<F>(&self, section: usize, lesson: usize, edit: F) -> Result<CourseDraft, WizardError>
    where
        F: FnOnce(&mut Lesson) -> Result<(), WizardError>,
    {
        self.lesson(section, lesson)?;
        let mut next = self.clone();
        edit(&mut next.sections[section].lessons[lesson])?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_draft_shape() {
        let draft = CourseDraft::new();
        assert_eq!(draft.sections.len(), 1);
        assert_eq!(draft.sections[0].lessons.len(), 1);

        let lesson = &draft.sections[0].lessons[0];
        assert!(lesson.enabled);
        assert_eq!(lesson.kind, LessonKind::Text);
        assert!(lesson.content.is_empty());
        assert_eq!(draft.schedule.max_students, 20);
        assert_eq!(draft.schedule.price, 35_000.0);
        assert!(draft.schedule.start_date.is_none());
    }

    #[test]
    fn test_remove_section_keeps_relative_order() {
        let draft = CourseDraft::new()
            .with_section_added()
            .with_section_added();
        assert_eq!(draft.sections.len(), 3);

        let second = draft.sections[1].id;
        let third = draft.sections[2].id;
        let next = draft.without_section(0).unwrap();

        assert_eq!(next.sections.len(), 2);
        assert_eq!(next.sections[0].id, second);
        assert_eq!(next.sections[1].id, third);
        // the source value is untouched
        assert_eq!(draft.sections.len(), 3);
    }

    #[test]
    fn test_last_section_and_lesson_are_kept() {
        let draft = CourseDraft::new();
        assert_eq!(draft.without_section(0), Err(WizardError::LastSectionRequired));
        assert_eq!(draft.without_lesson(0, 0), Err(WizardError::LastLessonRequired));
    }

    #[test]
    fn test_out_of_range_indices_are_rejected() {
        let draft = CourseDraft::new();
        assert_eq!(
            draft.without_section(1),
            Err(WizardError::InvalidIndex {
                target: IndexTarget::Section,
                index: 1,
                len: 1
            })
        );
        assert_eq!(
            draft.with_lesson_toggled(0, 3),
            Err(WizardError::InvalidIndex {
                target: IndexTarget::Lesson,
                index: 3,
                len: 1
            })
        );
        assert!(matches!(
            draft.with_lesson_added(2),
            Err(WizardError::InvalidIndex { target: IndexTarget::Section, .. })
        ));
    }

    #[test]
    fn test_lesson_kind_must_be_known() {
        let draft = CourseDraft::new();
        let next = draft
            .with_lesson_field(0, 0, LessonField::Kind, "video")
            .unwrap();
        assert_eq!(next.sections[0].lessons[0].kind, LessonKind::Video);

        let err = draft
            .with_lesson_field(0, 0, LessonField::Kind, "podcast")
            .unwrap_err();
        assert_eq!(
            err,
            WizardError::InvalidEnumValue {
                field: "kind",
                value: "podcast".to_string()
            }
        );
    }

    #[test]
    fn test_content_channels_are_independent() {
        let draft = CourseDraft::new()
            .with_lesson_content(0, 0, ContentChannel::Text, "Введение")
            .unwrap()
            .with_lesson_content(0, 0, ContentChannel::AudioUrl, "not a url")
            .unwrap();
        let content = &draft.sections[0].lessons[0].content;
        assert_eq!(content.text, "Введение");
        assert_eq!(content.audio_url, "not a url");
        assert!(content.video_url.is_empty());
    }

    #[test]
    fn test_schedule_numbers_are_parsed() {
        let draft = CourseDraft::new()
            .with_schedule(ScheduleField::MaxStudents, "30")
            .unwrap()
            .with_schedule(ScheduleField::Price, "42000.5")
            .unwrap();
        assert_eq!(draft.schedule.max_students, 30);
        assert_eq!(draft.schedule.price, 42_000.5);

        for bad in ["abc", "", "0", "-3"] {
            assert!(matches!(
                draft.with_schedule(ScheduleField::MaxStudents, bad),
                Err(WizardError::NumericParseFailure { .. })
            ));
        }
        assert!(draft.with_schedule(ScheduleField::Price, "-1").is_err());
        assert!(draft.with_schedule(ScheduleField::Price, "NaN").is_err());
    }

    #[test]
    fn test_schedule_dates() {
        let draft = CourseDraft::new()
            .with_schedule(ScheduleField::StartDate, "2024-09-01")
            .unwrap();
        assert_eq!(
            draft.schedule.start_date,
            NaiveDate::from_ymd_opt(2024, 9, 1)
        );

        assert!(matches!(
            draft.with_schedule(ScheduleField::StartDate, "01.09.2024"),
            Err(WizardError::InvalidDate { .. })
        ));

        let cleared = draft.with_schedule(ScheduleField::StartDate, "").unwrap();
        assert!(cleared.schedule.start_date.is_none());
    }

    #[test]
    fn test_position_of_follows_removals() {
        let draft = CourseDraft::new().with_section_added();
        let id = draft.sections[1].lessons[0].id;
        assert_eq!(draft.position_of(id), Some((1, 0)));

        let next = draft.without_section(0).unwrap();
        assert_eq!(next.position_of(id), Some((0, 0)));

        let gone = draft.without_section(1).unwrap();
        assert_eq!(gone.position_of(id), None);
    }

    #[test]
    fn test_issues_are_advisory() {
        let draft = CourseDraft::new();
        let issues = draft.issues();
        assert!(issues.contains(&DraftIssue::MissingTitle));
        assert!(issues.contains(&DraftIssue::UntitledLesson { section: 0, lesson: 0 }));

        let draft = draft
            .with_title("Основы программирования")
            .with_description("Игровые проекты")
            .with_lesson_field(0, 0, LessonField::Title, "Циклы")
            .unwrap()
            .with_schedule(ScheduleField::StartDate, "2024-09-10")
            .unwrap()
            .with_schedule(ScheduleField::EndDate, "2024-09-01")
            .unwrap();
        assert_eq!(draft.issues(), vec![DraftIssue::EndsBeforeStart]);
    }
}
