use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::draft::{CourseDraft, Schedule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    Draft,
    Published,
}

impl CourseStatus {
    pub fn label(self) -> &'static str {
        match self {
            CourseStatus::Draft => "Черновик",
            CourseStatus::Published => "Опубликован",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: CourseStatus,
    pub lessons: usize,
    pub students: u32,
    pub price: f64,
    pub schedule: Option<Schedule>,
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// A newly saved course: fresh id, draft status, nobody enrolled yet.
    pub fn from_draft(draft: CourseDraft) -> Self {
        let lessons = draft.lesson_count();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            status: CourseStatus::Draft,
            lessons,
            students: 0,
            price: draft.schedule.price,
            schedule: Some(draft.schedule),
            created_at: Utc::now(),
        }
    }
}

/// A course as shown on the teacher dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCard {
    #[serde(flatten)]
    pub course: Course,
    pub status_label: &'static str,
    pub price_label: String,
}

impl From<Course> for CourseCard {
    fn from(course: Course) -> Self {
        Self {
            status_label: course.status.label(),
            price_label: format_price(course.price),
            course,
        }
    }
}

/// Formats a price in tenge, whole units with grouped thousands
/// (`45 000 ₸`, separated by no-break spaces).
pub fn format_price(price: f64) -> String {
    let whole = price.max(0.0).round() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }
    grouped.push('\u{a0}');
    grouped.push('₸');
    grouped
}
