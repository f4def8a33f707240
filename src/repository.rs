use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Course, CourseDraft, CourseStatus};

/// The teacher's course list.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError>;
    async fn find_course_by_id(&self, id: Uuid) -> Result<Option<Course>, AppError>;
    /// Stores a finished draft, assigning its id and initial status.
    async fn insert_from_draft(&self, draft: CourseDraft) -> Result<Course, AppError>;
    async fn delete_course(&self, id: Uuid) -> Result<bool, AppError>;
}

/// Course list kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCourseRepository {
    courses: RwLock<Vec<Course>>,
}

impl InMemoryCourseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two sample courses the dashboard starts with.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let courses = vec![
            Course {
                id: Uuid::new_v4(),
                title: "Основы программирования для детей".to_string(),
                description: "Введение в мир программирования через игровые проекты".to_string(),
                status: CourseStatus::Published,
                lessons: 12,
                students: 25,
                price: 45_000.0,
                schedule: None,
                created_at: now,
            },
            Course {
                id: Uuid::new_v4(),
                title: "Создание веб-сайтов".to_string(),
                description: "Изучение HTML, CSS и JavaScript".to_string(),
                status: CourseStatus::Draft,
                lessons: 8,
                students: 0,
                price: 35_000.0,
                schedule: None,
                created_at: now,
            },
        ];
        Self {
            courses: RwLock::new(courses),
        }
    }
}

#[async_trait]
impl CourseRepository for InMemoryCourseRepository {
    async fn fetch_courses(&self) -> Result<Vec<Course>, AppError> {
        Ok(self.courses.read().await.clone())
    }

    async fn find_course_by_id(&self, id: Uuid) -> Result<Option<Course>, AppError> {
        let courses = self.courses.read().await;
        Ok(courses.iter().find(|c| c.id == id).cloned())
    }

    async fn insert_from_draft(&self, draft: CourseDraft) -> Result<Course, AppError> {
        let course = Course::from_draft(draft);
        self.courses.write().await.push(course.clone());
        info!("course {} added: {:?}", course.id, course.title);
        Ok(course)
    }

    async fn delete_course(&self, id: Uuid) -> Result<bool, AppError> {
        let mut courses = self.courses.write().await;
        let before = courses.len();
        courses.retain(|c| c.id != id);
        let removed = courses.len() < before;
        if removed {
            info!("course {} deleted", id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_courses() {
        let repo = InMemoryCourseRepository::seeded();
        let courses = repo.fetch_courses().await.expect("Failed to fetch courses");
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].status, CourseStatus::Published);
        assert_eq!(courses[1].students, 0);
    }

    #[tokio::test]
    async fn test_insert_from_draft_appends() {
        let repo = InMemoryCourseRepository::seeded();
        let draft = CourseDraft::new().with_title("3D-моделирование").with_section_added();

        let course = repo
            .insert_from_draft(draft)
            .await
            .expect("Failed to insert course");
        assert_eq!(course.status, CourseStatus::Draft);
        assert_eq!(course.lessons, 2);

        let courses = repo.fetch_courses().await.expect("Failed to fetch courses");
        assert_eq!(courses.len(), 3);
        assert_eq!(courses[2].id, course.id);
    }

    #[tokio::test]
    async fn test_delete_course() {
        let repo = InMemoryCourseRepository::new();
        let course = repo
            .insert_from_draft(CourseDraft::new())
            .await
            .expect("Failed to insert course");

        assert!(repo.delete_course(course.id).await.unwrap());
        assert!(!repo.delete_course(course.id).await.unwrap());
        assert!(repo.find_course_by_id(course.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_stay_unique_after_delete() {
        let repo = InMemoryCourseRepository::seeded();
        let first = repo.fetch_courses().await.unwrap()[0].id;
        repo.delete_course(first).await.unwrap();

        let a = repo.insert_from_draft(CourseDraft::new()).await.unwrap();
        let b = repo.insert_from_draft(CourseDraft::new()).await.unwrap();
        let ids: Vec<Uuid> = repo.fetch_courses().await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 3);
        assert_ne!(a.id, b.id);
    }
}
