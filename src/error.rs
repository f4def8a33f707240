use std::fmt;

use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::models::draft::ScheduleField;
use crate::wizard::step::Step;

/// What an out-of-range index was pointing at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexTarget {
    Section,
    Lesson,
    Step,
}

impl fmt::Display for IndexTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndexTarget::Section => "section",
            IndexTarget::Lesson => "lesson",
            IndexTarget::Step => "step",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    #[error("{target} index {index} is out of range (len {len})")]
    InvalidIndex {
        target: IndexTarget,
        index: usize,
        len: usize,
    },

    #[error("a course must keep at least one section")]
    LastSectionRequired,

    #[error("a section must keep at least one lesson")]
    LastLessonRequired,

    #[error("{value:?} is not a valid {field}")]
    InvalidEnumValue { field: &'static str, value: String },

    #[error("{value:?} is not a valid number for {field}")]
    NumericParseFailure { field: ScheduleField, value: String },

    #[error("{value:?} is not a valid date for {field}")]
    InvalidDate { field: ScheduleField, value: String },

    #[error("the course can only be saved from the schedule step, currently on {current}")]
    SubmitUnavailable { current: Step },

    #[error("the wizard is closed")]
    WizardClosed,

    #[error("nothing to undo")]
    NothingToUndo,
}

impl WizardError {
    /// Schedule input errors are recovered by keeping the previous value.
    pub fn is_recoverable_input(&self) -> bool {
        matches!(
            self,
            WizardError::NumericParseFailure { .. } | WizardError::InvalidDate { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Wizard(#[from] WizardError),

    #[error("Not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Login required")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal server error")]
    InternalServerError,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Wizard(e) => {
                let status = match e {
                    WizardError::SubmitUnavailable { .. } | WizardError::WizardClosed => {
                        StatusCode::CONFLICT
                    }
                    _ => StatusCode::BAD_REQUEST,
                };
                warn!("wizard rejected operation: {}", e);
                (status, e.to_string())
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Login required".to_string()),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            AppError::InternalServerError => {
                error!("internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
