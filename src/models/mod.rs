pub mod course;
pub mod draft;
pub mod landing;
pub mod session;
pub mod student;

pub use course::{Course, CourseCard, CourseStatus};
pub use draft::{
    ContentChannel, CourseDraft, DraftIssue, Lesson, LessonContent, LessonField, LessonId,
    LessonKind, Schedule, ScheduleField, Section, SectionId,
};
pub use landing::LandingPage;
pub use session::{AuthForm, AuthMode, AuthSubmission, Role, Session};
pub use student::{Assignment, AssignmentStatus, EnrolledCourse, Notification, NotificationKind, StudentProfile};
