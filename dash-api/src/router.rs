use axum::{http::Uri, routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

use crate::{app_state::AppState, routes, routes::ApiError};

pub fn create(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/", get(routes::dashboard::index))
        .nest("/api", routes::dashboard::router())
        .fallback(not_found)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("no route for {}", uri.path()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{
        adapters::outbound::mock::{MockFailure, MockTimeTrackingClient},
        domain::models::{
            GroupedReport, NewTimeEntry, Project, ProjectId, ReportGroup, TimeEntry, TimeEntryId,
            WorkspaceId,
        },
        factory::app_state_with,
    };

    async fn app(client: &MockTimeTrackingClient) -> Router {
        let state = app_state_with(Arc::new(client.clone())).await.unwrap();
        create(state)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let (status, body) = send(app, request).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    fn toggle_request(body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/toggle")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn index_lists_projects() {
        let client = MockTimeTrackingClient::new()
            .with_projects(vec![Project::new(1001, "Alpha"), Project::new(1002, "Beta")]);

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, html) = send(app(&client).await, request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"<option value="1001">Alpha</option>"#));
        assert!(html.contains(r#"<option value="1002">Beta</option>"#));
    }

    #[tokio::test]
    async fn index_renders_when_project_listing_fails() {
        let client = MockTimeTrackingClient::new().failing_projects(MockFailure::Unavailable);

        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (status, html) = send(app(&client).await, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("<option").count(), 1);
    }

    #[tokio::test]
    async fn status_when_stopped() {
        let client = MockTimeTrackingClient::new();

        let (status, body) = get_json(app(&client).await, "/api/status").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "stopped", "text": "Timer stopped"}));
    }

    #[tokio::test]
    async fn status_when_running() {
        let client = MockTimeTrackingClient::new().with_current_entry(
            TimeEntry::new(42, "2026-10-14T10:00:00Z")
                .with_description("Deep work")
                .with_project(1001),
        );

        let (status, body) = get_json(app(&client).await, "/api/status").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
        assert_eq!(body["text"], "Deep work");
        assert_eq!(body["id"], 42);
        assert_eq!(body["project_id"], 1001);
        assert_eq!(body["start"], "2026-10-14T10:00:00Z");
    }

    #[tokio::test]
    async fn status_when_service_times_out() {
        let client = MockTimeTrackingClient::new().failing_current_entry(MockFailure::Timeout);

        let (status, body) = get_json(app(&client).await, "/api/status").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "error", "text": "API error"}));
    }

    #[tokio::test]
    async fn summary_aggregates_projects() {
        let client = MockTimeTrackingClient::new().with_report(GroupedReport {
            groups: vec![
                ReportGroup::new(Some(ProjectId::new(1)), vec![120]),
                ReportGroup::new(Some(ProjectId::new(2)), vec![10, 20]),
            ],
        });

        let (status, body) = get_json(app(&client).await, "/api/summary").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"total_today": "00:02:30", "projects": {"1": "00:02:00", "2": "00:00:30"}})
        );
    }

    #[tokio::test]
    async fn summary_degrades_on_failure() {
        let client = MockTimeTrackingClient::new().failing_report(MockFailure::Unavailable);

        let (status, body) = get_json(app(&client).await, "/api/summary").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"total_today": "Error", "projects": {}}));
    }

    #[tokio::test]
    async fn toggle_starts_with_payload() {
        let client = MockTimeTrackingClient::new();

        let request = toggle_request(json!({"description": "Review", "projectId": "1001"}));
        let (status, body) = send(app(&client).await, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"result": "toggled"}));
        assert_eq!(
            client.create_calls(),
            vec![(
                WorkspaceId::new(7),
                NewTimeEntry::new("Review").with_project(Some(ProjectId::new(1001)))
            )]
        );
        assert!(client.stop_calls().is_empty());
    }

    #[tokio::test]
    async fn toggle_keeps_description_when_project_is_invalid() {
        let client = MockTimeTrackingClient::new();

        let request = toggle_request(json!({"description": "Write report", "projectId": "abc"}));
        let (status, body) = send(app(&client).await, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"result": "toggled"}));
        assert_eq!(
            client.create_calls(),
            vec![(WorkspaceId::new(7), NewTimeEntry::new("Write report"))]
        );
    }

    #[tokio::test]
    async fn toggle_with_malformed_json_starts_empty_entry() {
        let client = MockTimeTrackingClient::new();

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/toggle")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, _) = send(app(&client).await, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            client.create_calls(),
            vec![(WorkspaceId::new(7), NewTimeEntry::default())]
        );
    }

    #[tokio::test]
    async fn toggle_stops_running_entry() {
        let client = MockTimeTrackingClient::new()
            .with_current_entry(TimeEntry::new(42, "2026-10-14T10:00:00Z"));

        let request = toggle_request(json!({"description": "ignored"}));
        let (status, _) = send(app(&client).await, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            client.stop_calls(),
            vec![(WorkspaceId::new(7), TimeEntryId::new(42))]
        );
        assert!(client.create_calls().is_empty());
    }

    #[tokio::test]
    async fn toggle_confirms_even_when_create_fails() {
        let client = MockTimeTrackingClient::new().failing_create(MockFailure::Unavailable);

        let request = toggle_request(json!({"description": "x"}));
        let (status, body) = send(app(&client).await, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({"result": "toggled"}));
        assert_eq!(client.create_calls().len(), 1);
    }

    #[tokio::test]
    async fn toggle_without_body_still_stops() {
        let client = MockTimeTrackingClient::new()
            .with_current_entry(TimeEntry::new(42, "2026-10-14T10:00:00Z"));

        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/toggle")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app(&client).await, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(client.stop_calls().len(), 1);
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let client = MockTimeTrackingClient::new();

        let (status, body) = get_json(app(&client).await, "/api/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "no route for /api/nope"}));
    }
}
