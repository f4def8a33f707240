use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::models::{
    Assignment, AssignmentStatus, EnrolledCourse, Notification, NotificationKind, StudentProfile,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStats {
    pub active_courses: usize,
    pub study_hours: u32,
    pub achievements: u32,
    pub average_grade: Option<f64>,
    pub unread_notifications: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentCard {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub status_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingClass {
    pub course_id: String,
    pub title: String,
    pub starts_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDashboard {
    pub stats: StudentStats,
    pub courses: Vec<EnrolledCourse>,
    pub assignments: Vec<AssignmentCard>,
    pub upcoming: Vec<UpcomingClass>,
    pub notifications: Vec<Notification>,
}

struct StudentData {
    profile: StudentProfile,
    courses: Vec<EnrolledCourse>,
    assignments: Vec<Assignment>,
    notifications: Vec<Notification>,
}

/// In-memory data behind the student dashboard.
pub struct StudentService {
    data: RwLock<StudentData>,
}

impl StudentService {
    pub fn seeded() -> Self {
        let data = StudentData {
            profile: StudentProfile {
                study_hours: 24,
                achievements: 5,
            },
            courses: vec![
                EnrolledCourse {
                    id: "1".to_string(),
                    title: "Основы программирования для детей".to_string(),
                    progress: 45,
                    next_lesson: "Циклы и условия".to_string(),
                    instructor: "Анна Петрова".to_string(),
                    thumbnail: "https://images.unsplash.com/photo-1516116216624-53e697fedbea?auto=format&fit=crop&w=300&h=200&q=80".to_string(),
                    next_class: datetime(2024, 3, 20, 15, 0),
                },
                EnrolledCourse {
                    id: "2".to_string(),
                    title: "Создание веб-сайтов".to_string(),
                    progress: 20,
                    next_lesson: "CSS стили".to_string(),
                    instructor: "Иван Сидоров".to_string(),
                    thumbnail: "https://images.unsplash.com/photo-1547658719-da2b51169166?auto=format&fit=crop&w=300&h=200&q=80".to_string(),
                    next_class: datetime(2024, 3, 21, 16, 30),
                },
            ],
            assignments: vec![
                Assignment {
                    id: "1".to_string(),
                    title: "Создание простой игры".to_string(),
                    course: "Основы программирования для детей".to_string(),
                    due_date: date(2024, 3, 25),
                    status: AssignmentStatus::Pending,
                    grade: None,
                },
                Assignment {
                    id: "2".to_string(),
                    title: "Верстка landing page".to_string(),
                    course: "Создание веб-сайтов".to_string(),
                    due_date: date(2024, 3, 23),
                    status: AssignmentStatus::Submitted,
                    grade: None,
                },
                Assignment {
                    id: "3".to_string(),
                    title: "Алгоритмы сортировки".to_string(),
                    course: "Основы программирования для детей".to_string(),
                    due_date: date(2024, 3, 18),
                    status: AssignmentStatus::Graded,
                    grade: Some(95),
                },
            ],
            notifications: vec![
                Notification {
                    id: "1".to_string(),
                    kind: NotificationKind::Assignment,
                    title: "Новое задание".to_string(),
                    message: "Добавлено новое задание по курсу \"Основы программирования\"".to_string(),
                    time: "2 часа назад".to_string(),
                    read: false,
                },
                Notification {
                    id: "2".to_string(),
                    kind: NotificationKind::Feedback,
                    title: "Оценка за задание".to_string(),
                    message: "Ваша работа \"Верстка landing page\" проверена".to_string(),
                    time: "1 день назад".to_string(),
                    read: true,
                },
            ],
        };
        Self {
            data: RwLock::new(data),
        }
    }

    pub async fn dashboard(&self) -> StudentDashboard {
        let data = self.data.read().await;

        let grades: Vec<f64> = data
            .assignments
            .iter()
            .filter(|a| a.status == AssignmentStatus::Graded)
            .filter_map(|a| a.grade.map(f64::from))
            .collect();
        let average_grade = if grades.is_empty() {
            None
        } else {
            Some(grades.iter().sum::<f64>() / grades.len() as f64)
        };

        let mut upcoming: Vec<UpcomingClass> = data
            .courses
            .iter()
            .map(|c| UpcomingClass {
                course_id: c.id.clone(),
                title: c.title.clone(),
                starts_at: c.next_class,
            })
            .collect();
        upcoming.sort_by_key(|u| u.starts_at);

        let stats = StudentStats {
            active_courses: data.courses.len(),
            study_hours: data.profile.study_hours,
            achievements: data.profile.achievements,
            average_grade,
            unread_notifications: data.notifications.iter().filter(|n| !n.read).count(),
        };
        debug!("student dashboard stats: {:?}", stats);

        StudentDashboard {
            stats,
            courses: data.courses.clone(),
            assignments: data
                .assignments
                .iter()
                .map(|a| AssignmentCard {
                    status_label: a.status_label(),
                    assignment: a.clone(),
                })
                .collect(),
            upcoming,
            notifications: data.notifications.clone(),
        }
    }

    /// Marks a notification as read. Returns `false` for unknown ids.
    pub async fn mark_notification_read(&self, id: &str) -> bool {
        let mut data = self.data.write().await;
        match data.notifications.iter_mut().find(|n| n.id == id) {
            Some(n) => {
                n.read = true;
                true
            }
            None => false,
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap_or_default()
}
