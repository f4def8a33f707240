use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::config::Config;
use crate::models::{AuthForm, Session};
use crate::repository::{CourseRepository, InMemoryCourseRepository};
use crate::services::StudentService;
use crate::wizard::{CourseWizard, NoopMediaEngine};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub courses: Arc<dyn CourseRepository>,
    pub students: Arc<StudentService>,
    pub session: Arc<RwLock<Session>>,
    pub auth_form: Arc<Mutex<AuthForm>>,
    /// The teacher's open course wizard, if any.
    pub wizard: Arc<Mutex<Option<CourseWizard>>>,
}

impl AppState {
    /// State seeded with the sample dashboard data.
    pub fn new(config: Config) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::new(config.demo_logged_in))),
            config: Arc::new(config),
            courses: Arc::new(InMemoryCourseRepository::seeded()),
            students: Arc::new(StudentService::seeded()),
            auth_form: Arc::new(Mutex::new(AuthForm::default())),
            wizard: Arc::new(Mutex::new(None)),
        }
    }

    pub fn new_wizard(&self) -> CourseWizard {
        CourseWizard::new(Box::new(NoopMediaEngine)).with_undo_depth(self.config.undo_depth)
    }
}
