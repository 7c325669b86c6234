use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

use super::setup::TestSetup;

// ============================================================================
// Request Helpers
// ============================================================================

impl TestSetup {
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    // ========================================================================
    // Domain Actions
    // ========================================================================

    /// Creates a manager and returns its ID
    pub async fn create_manager(&self, name: &str) -> String {
        let (status, body) = self.post("/manager", json!({ "name": name })).await;
        assert_eq!(status, StatusCode::CREATED, "create manager failed: {}", body);
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn credit_points(&self, manager: &str, point: u32) -> Value {
        let (status, body) = self
            .post(
                "/manager/point",
                json!({ "manager": manager, "point": point, "type": 1 }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "credit failed: {}", body);
        body
    }

    pub async fn sign_player(&self, manager: &str, player: &str) -> Value {
        let (status, body) = self
            .post(
                "/manager/player",
                json!({ "manager": manager, "player": player, "type": 1 }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "sign player failed: {}", body);
        body
    }

    /// Creates a season and returns its ID
    pub async fn create_season(&self, kind: &str, title: &str) -> String {
        let (status, body) = self
            .post("/season", json!({ "type": kind, "title": title }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create season failed: {}", body);
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn record_result(
        &self,
        season: &str,
        home: &str,
        away: &str,
        score: [u32; 2],
        scorers: Value,
    ) -> (StatusCode, Value) {
        self.post(
            "/result",
            json!({
                "season": season,
                "home": home,
                "away": away,
                "score": score,
                "scorer": scorers,
            }),
        )
        .await
    }

    pub async fn statistics(&self, season: &str) -> (StatusCode, Value) {
        self.post("/statistics", json!({ "season": season })).await
    }
}
