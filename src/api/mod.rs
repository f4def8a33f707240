use axum::Json;
use axum::extract::Path;
use axum::routing::{delete, post};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::*;
use crate::services::StudentDashboard;
use crate::state::AppState;
use crate::wizard::{DraftOutbox, WizardCommand, WizardView};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/landing", get(landing))
        .route("/session", get(get_session))
        .route("/session/login", post(login))
        .route("/session/logout", post(logout))
        .route("/session/switch-role", post(switch_role))
        .route("/auth", get(get_auth_form))
        .route("/auth/toggle", post(toggle_auth_mode))
        .route("/auth/submit", post(submit_auth))
        .route("/teacher/courses", get(list_courses))
        .route("/teacher/courses/{id}", delete(delete_course))
        .route(
            "/teacher/wizard",
            get(get_wizard).post(open_wizard).delete(cancel_wizard),
        )
        .route("/teacher/wizard/commands", post(apply_wizard_command))
        .route("/teacher/wizard/submit", post(submit_wizard))
        .route("/student/dashboard", get(student_dashboard))
        .route(
            "/student/notifications/{id}/read",
            post(mark_notification_read),
        )
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn landing() -> Json<LandingPage> {
    Json(LandingPage::sankids())
}

async fn require_role(state: &AppState, role: Role) -> Result<(), AppError> {
    let session = state.session.read().await;
    if !session.logged_in {
        return Err(AppError::Unauthorized);
    }
    if session.role != role {
        return Err(AppError::Forbidden(format!(
            "this page is for the {:?} role",
            role
        )));
    }
    Ok(())
}

// session

async fn get_session(State(state): State<AppState>) -> Json<Session> {
    Json(*state.session.read().await)
}

async fn login(State(state): State<AppState>) -> Json<Session> {
    let mut session = state.session.write().await;
    session.login();
    Json(*session)
}

async fn logout(State(state): State<AppState>) -> Json<Session> {
    let mut session = state.session.write().await;
    session.logout();
    Json(*session)
}

async fn switch_role(State(state): State<AppState>) -> Result<Json<Session>, AppError> {
    let mut session = state.session.write().await;
    if !session.logged_in {
        return Err(AppError::Unauthorized);
    }
    session.switch_role();
    Ok(Json(*session))
}

// auth form

async fn get_auth_form(State(state): State<AppState>) -> Json<AuthForm> {
    Json(*state.auth_form.lock().await)
}

async fn toggle_auth_mode(State(state): State<AppState>) -> Json<AuthForm> {
    let mut form = state.auth_form.lock().await;
    form.toggle_mode();
    Json(*form)
}

async fn submit_auth(
    State(state): State<AppState>,
    Json(req): Json<AuthSubmission>,
) -> Result<StatusCode, AppError> {
    let form = *state.auth_form.lock().await;
    let missing = form.missing_fields(&req);
    if !missing.is_empty() {
        return Err(AppError::BadRequest(format!(
            "required fields missing: {}",
            missing.join(", ")
        )));
    }
    info!("auth form submitted: mode={:?} email={} role={:?}", form.mode, req.email, req.role);
    Ok(StatusCode::ACCEPTED)
}

// teacher

async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<CourseCard>>, AppError> {
    require_role(&state, Role::Teacher).await?;
    let courses = state.courses.fetch_courses().await?;
    Ok(Json(courses.into_iter().map(CourseCard::from).collect()))
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    require_role(&state, Role::Teacher).await?;
    if state.courses.delete_course(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}

async fn open_wizard(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<WizardView>), AppError> {
    require_role(&state, Role::Teacher).await?;
    let mut slot = state.wizard.lock().await;
    if slot.is_some() {
        return Err(AppError::Conflict("a course wizard is already open".to_string()));
    }
    let wizard = slot.insert(state.new_wizard());
    Ok((StatusCode::CREATED, Json(wizard.view()?)))
}

async fn get_wizard(State(state): State<AppState>) -> Result<Json<WizardView>, AppError> {
    require_role(&state, Role::Teacher).await?;
    let slot = state.wizard.lock().await;
    let wizard = slot.as_ref().ok_or(AppError::NotFound)?;
    Ok(Json(wizard.view()?))
}

async fn apply_wizard_command(
    State(state): State<AppState>,
    Json(command): Json<WizardCommand>,
) -> Result<Json<WizardView>, AppError> {
    require_role(&state, Role::Teacher).await?;
    let mut slot = state.wizard.lock().await;
    let wizard = slot.as_mut().ok_or(AppError::NotFound)?;
    wizard.apply_command(command)?;
    Ok(Json(wizard.view()?))
}

async fn submit_wizard(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<CourseCard>), AppError> {
    require_role(&state, Role::Teacher).await?;
    let mut slot = state.wizard.lock().await;
    let wizard = slot.as_mut().ok_or(AppError::NotFound)?;

    let mut outbox = DraftOutbox::default();
    wizard.submit(&mut outbox)?;
    if outbox.closed {
        *slot = None;
    }

    let draft = outbox.saved.ok_or(AppError::InternalServerError)?;
    let course = state.courses.insert_from_draft(draft).await?;
    Ok((StatusCode::CREATED, Json(CourseCard::from(course))))
}

async fn cancel_wizard(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    require_role(&state, Role::Teacher).await?;
    let mut slot = state.wizard.lock().await;
    let wizard = slot.as_mut().ok_or(AppError::NotFound)?;

    let mut outbox = DraftOutbox::default();
    wizard.cancel(&mut outbox)?;
    if outbox.closed {
        *slot = None;
    }
    Ok(StatusCode::NO_CONTENT)
}

// student

async fn student_dashboard(
    State(state): State<AppState>,
) -> Result<Json<StudentDashboard>, AppError> {
    require_role(&state, Role::Student).await?;
    Ok(Json(state.students.dashboard().await))
}

async fn mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    require_role(&state, Role::Student).await?;
    if state.students.mark_notification_read(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound)
    }
}
