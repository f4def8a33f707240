use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use serde_json::{Value, json};
use tower::ServiceExt;

use sankids::api::router;
use sankids::config::Config;
use sankids::state::AppState;

fn app() -> Router {
    router(AppState::new(Config::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let response = send(&app, Method::GET, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_landing_page() {
    let app = app();
    let response = send(&app, Method::GET, "/landing", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["brand"], "Sankids");
    assert_eq!(json["trialLessons"].as_array().unwrap().len(), 3);
    assert_eq!(json["footer"]["contacts"]["email"], "info@sankids.ru");
}

#[tokio::test]
async fn test_teacher_course_list() {
    let app = app();
    let response = send(&app, Method::GET, "/teacher/courses", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let courses = json.as_array().unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0]["status"], "published");
    assert_eq!(courses[0]["priceLabel"], "45\u{a0}000\u{a0}₸");
}

#[tokio::test]
async fn test_delete_course() {
    let app = app();
    let courses = body_json(send(&app, Method::GET, "/teacher/courses", None).await).await;
    let id = courses[1]["id"].as_str().unwrap().to_string();

    let uri = format!("/teacher/courses/{}", id);
    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let courses = body_json(send(&app, Method::GET, "/teacher/courses", None).await).await;
    assert_eq!(courses.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_wizard_full_flow() {
    let app = app();

    let response = send(&app, Method::POST, "/teacher/wizard", None).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let view = body_json(response).await;
    assert_eq!(view["step"], "basic_info");
    assert_eq!(view["draft"]["sections"].as_array().unwrap().len(), 1);

    let response = send(&app, Method::POST, "/teacher/wizard", None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let commands = [
        json!({"op": "set_title", "value": "Робототехника"}),
        json!({"op": "add_section"}),
        json!({"op": "add_lesson", "section": 1}),
        json!({"op": "set_lesson_field", "section": 1, "lesson": 1, "field": "title", "value": "Датчики"}),
        json!({"op": "set_schedule", "field": "maxStudents", "value": "12"}),
        json!({"op": "set_schedule", "field": "maxStudents", "value": "много"}),
        json!({"op": "go_to", "step": 3}),
    ];
    for command in commands {
        let response = send(&app, Method::POST, "/teacher/wizard/commands", Some(command)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let view = body_json(send(&app, Method::GET, "/teacher/wizard", None).await).await;
    assert_eq!(view["step"], "schedule");
    assert_eq!(view["canSubmit"], true);
    assert_eq!(view["draft"]["schedule"]["maxStudents"], 12);

    let response = send(&app, Method::POST, "/teacher/wizard/submit", None).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let course = body_json(response).await;
    assert_eq!(course["title"], "Робототехника");
    assert_eq!(course["status"], "draft");
    assert_eq!(course["lessons"], 3);
    assert_eq!(course["students"], 0);

    let response = send(&app, Method::GET, "/teacher/wizard", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let courses = body_json(send(&app, Method::GET, "/teacher/courses", None).await).await;
    assert_eq!(courses.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_wizard_rejections() {
    let app = app();
    send(&app, Method::POST, "/teacher/wizard", None).await;

    let response = send(&app, Method::POST, "/teacher/wizard/submit", None).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = send(
        &app,
        Method::POST,
        "/teacher/wizard/commands",
        Some(json!({"op": "remove_section", "section": 0})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        Method::POST,
        "/teacher/wizard/commands",
        Some(json!({"op": "go_to", "step": -1})),
    )
    .await;
    assert!(response.status().is_client_error());

    let view = body_json(send(&app, Method::GET, "/teacher/wizard", None).await).await;
    assert_eq!(view["step"], "basic_info");
}

#[tokio::test]
async fn test_cancel_wizard_discards_draft() {
    let app = app();
    send(&app, Method::POST, "/teacher/wizard", None).await;
    send(
        &app,
        Method::POST,
        "/teacher/wizard/commands",
        Some(json!({"op": "set_title", "value": "Черновик"})),
    )
    .await;

    let response = send(&app, Method::DELETE, "/teacher/wizard", None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let courses = body_json(send(&app, Method::GET, "/teacher/courses", None).await).await;
    assert_eq!(courses.as_array().unwrap().len(), 2);

    let response = send(&app, Method::POST, "/teacher/wizard", None).await;
    let view = body_json(response).await;
    assert_eq!(view["draft"]["title"], "");
}

#[tokio::test]
async fn test_dashboards_follow_session() {
    let app = app();

    let response = send(&app, Method::GET, "/student/dashboard", None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let session = body_json(send(&app, Method::POST, "/session/switch-role", None).await).await;
    assert_eq!(session["role"], "student");

    let response = send(&app, Method::GET, "/student/dashboard", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let dashboard = body_json(response).await;
    assert_eq!(dashboard["stats"]["activeCourses"], 2);

    let response = send(&app, Method::GET, "/teacher/courses", None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    send(&app, Method::POST, "/session/logout", None).await;
    let response = send(&app, Method::GET, "/student/dashboard", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let session = body_json(send(&app, Method::POST, "/session/login", None).await).await;
    assert_eq!(session["loggedIn"], true);
}

#[tokio::test]
async fn test_auth_form_validation() {
    let app = app();
    let response = send(
        &app,
        Method::POST,
        "/auth/submit",
        Some(json!({"email": "anna@sankids.ru", "password": "secret"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let form = body_json(send(&app, Method::POST, "/auth/toggle", None).await).await;
    assert_eq!(form["mode"], "register");

    let response = send(
        &app,
        Method::POST,
        "/auth/submit",
        Some(json!({"email": "anna@sankids.ru", "password": "secret"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
