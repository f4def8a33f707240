use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledCourse {
    pub id: String,
    pub title: String,
    /// Percent complete, 0-100.
    pub progress: u8,
    pub next_lesson: String,
    pub instructor: String,
    pub thumbnail: String,
    pub next_class: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Pending,
    Submitted,
    Graded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub course: String,
    pub due_date: NaiveDate,
    pub status: AssignmentStatus,
    pub grade: Option<u8>,
}

impl Assignment {
    pub fn status_label(&self) -> String {
        match (self.status, self.grade) {
            (AssignmentStatus::Pending, _) => "Ожидает выполнения".to_string(),
            (AssignmentStatus::Submitted, _) => "На проверке".to_string(),
            (AssignmentStatus::Graded, Some(grade)) => format!("Оценка: {}", grade),
            (AssignmentStatus::Graded, None) => "Оценка: —".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Assignment,
    Announcement,
    Feedback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: String,
    pub read: bool,
}

/// Profile counters that have no source data of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub study_hours: u32,
    pub achievements: u32,
}
