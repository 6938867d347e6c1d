// Drives the whole HTTP surface: save a profile, log sessions, read the dashboard.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn log_session(app: &Router, date: &str, start: &str, end: &str, custom_rate: Option<f64>) {
    let body = json!({
        "user_id": "u-1",
        "date": date,
        "start_time": start,
        "end_time": end,
        "default_rate": custom_rate.is_none(),
        "custom_rate": custom_rate,
    });
    let (status, _) = send(app, json_request("POST", "/log-work-session", body)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn builds_the_dashboard_from_logged_sessions() {
    let app = router(make_test_state());

    let profile = json!({
        "user_id": "u-1",
        "default_wage": 20.0,
        "currency": "usd",
        "time_format": "12h"
    });
    let (status, _) = send(&app, json_request("PUT", "/profile", profile)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Week of Mon 2026-10-12.
    log_session(&app, "2026-10-12", "09:00:00", "17:00:00", None).await;
    log_session(&app, "2026-10-14", "13:00:00", "15:00:00", Some(15.0)).await;
    // Previous week, same month.
    log_session(&app, "2026-10-06", "09:00:00", "15:00:00", None).await;
    // Previous month.
    log_session(&app, "2026-09-30", "09:00:00", "13:00:00", None).await;

    let (status, dashboard) = send(&app, get("/dashboard?user_id=u-1&today=2026-10-15")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["week_hours"], 10.0);
    assert_eq!(dashboard["week_hours_delta"], 4.0);
    // 14h at 20/h plus 2h at 15/h.
    assert_eq!(dashboard["month_earnings"], 310.0);
    assert_eq!(dashboard["month_earnings_delta"], 230.0);
    assert_eq!(dashboard["days_worked_this_month"], 3);
    assert_eq!(dashboard["currency_symbol"], "$");
    assert_eq!(dashboard["time_format"], "12h");
    assert_eq!(dashboard["weekly_hours"][0]["hours"], 8.0);
    assert_eq!(dashboard["weekly_hours"][2]["hours"], 2.0);

    let recent = dashboard["recent_logs"].as_array().unwrap();
    assert_eq!(recent.len(), 4);
    assert_eq!(recent[0]["date"], "2026-10-14");
    assert_eq!(recent[0]["start_display"], "1:00 PM");
    assert_eq!(recent[0]["earnings"], 30.0);
    assert_eq!(recent[3]["date"], "2026-09-30");
}

#[tokio::test]
async fn lists_the_logged_sessions_and_profile() {
    let app = router(make_test_state());
    log_session(&app, "2026-10-12", "09:00:00", "10:00:00", None).await;
    log_session(&app, "2026-10-13", "09:00:00", "10:00:00", None).await;

    let (status, list) = send(&app, get("/list-work-logs?user_id=u-1&limit=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["date"], "2026-10-13");

    let (status, _) = send(&app, get("/profile?user_id=u-1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
