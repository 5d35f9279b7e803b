// End-to-end tests for the HTTP and WebSocket endpoints

use airhockey_ai::ai::{DecisionEngine, DifficultyTable};
use airhockey_ai::config::Config;
use airhockey_ai::server::{self, AppState};
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use futures::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::Message;
use tower::ServiceExt;

fn app(seed: Option<u64>) -> Router {
    let engine = DecisionEngine::new(DifficultyTable::default()).unwrap();
    let state = AppState::new(engine, 600.0, seed);
    server::router(state, &Config::default().server.allowed_origins).unwrap()
}

fn game_state() -> Value {
    json!({
        "puck": { "x": 240.0, "y": 560.0, "vx": 40.0, "vy": -300.0, "radius": 15.0 },
        "human_paddle": { "x": 300.0, "y": 720.0, "radius": 30.0 },
        "ai_paddle": { "x": 300.0, "y": 60.0, "radius": 30.0 },
        "table_width": 600.0,
        "table_height": 800.0,
        "difficulty": "easy",
        "ai_mode": "rule_based"
    })
}

async fn post_move(app: Router, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/ai/move")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_move_returns_target_inside_ai_half() {
    for mode in ["rule_based", "model_based"] {
        let mut state = game_state();
        state["ai_mode"] = mode.into();

        let (status, body) = post_move(app(None), state.to_string()).await;
        assert_eq!(status, StatusCode::OK);

        let x = body["target_x"].as_f64().unwrap();
        let y = body["target_y"].as_f64().unwrap();
        assert!((30.0..=570.0).contains(&x), "x = {}", x);
        assert!((30.0..=370.0).contains(&y), "y = {}", y);
    }
}

#[tokio::test]
async fn test_seeded_service_repeats_decisions() {
    let (_, first) = post_move(app(Some(11)), game_state().to_string()).await;
    let (_, second) = post_move(app(Some(11)), game_state().to_string()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_difficulty_rejected_at_boundary() {
    let mut state = game_state();
    state["difficulty"] = "legendary".into();

    let (status, body) = post_move(app(None), state.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("invalid game state"));
}

#[tokio::test]
async fn test_invalid_geometry_rejected_at_boundary() {
    let mut state = game_state();
    state["table_width"] = (-600.0).into();

    let (status, body) = post_move(app(None), state.to_string()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("table dimensions"));
}

#[tokio::test]
async fn test_root_health_and_profiles() {
    let get = |uri: &'static str| async move {
        let response = app(None)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice::<Value>(&bytes).unwrap()
    };

    assert_eq!(get("/").await["status"], "running");
    assert_eq!(get("/health").await, json!({ "status": "healthy" }));

    let profiles = get("/ai/profiles").await;
    assert_eq!(profiles["paddle_speed"], 600.0);
    assert_eq!(profiles["difficulties"]["easy"]["speed_multiplier"], 0.4);
    assert_eq!(profiles["difficulties"]["hard"]["reaction_delay"], 0.0);
}

#[tokio::test]
async fn test_cors_allows_local_frontend_only() {
    let preflight = |origin: &'static str| {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/ai/move")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap()
    };

    let allowed = app(None).oneshot(preflight("http://localhost:3000")).await.unwrap();
    assert_eq!(
        allowed.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        allowed.headers().get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );

    let denied = app(None).oneshot(preflight("http://evil.example")).await.unwrap();
    assert!(denied.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[test]
fn test_wildcard_origin_is_configuration_error() {
    let engine = DecisionEngine::new(DifficultyTable::default()).unwrap();
    let state = AppState::new(engine, 600.0, None);
    assert!(server::router(state, &["*".to_string()]).is_err());
}

#[tokio::test]
async fn test_stream_survives_malformed_message() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(None)).await.unwrap();
    });

    let (mut ws, _) = tokio_tungstenite::connect_async(format!("ws://{}/ai/ws", addr))
        .await
        .unwrap();

    async fn next_json(
        ws: &mut tokio_tungstenite::WebSocketStream<
            tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
        >,
    ) -> Value {
        loop {
            match ws.next().await.unwrap().unwrap() {
                Message::Text(text) => return serde_json::from_str(&text).unwrap(),
                Message::Ping(_) | Message::Pong(_) => continue,
                other => panic!("unexpected frame {:?}", other),
            }
        }
    }

    ws.send(Message::Text("{\"puck\": 42}".into())).await.unwrap();
    let reply = next_json(&mut ws).await;
    assert!(reply["error"].is_string(), "reply = {}", reply);

    // Same connection still answers
    for _ in 0..3 {
        ws.send(Message::Text(game_state().to_string())).await.unwrap();
        let reply = next_json(&mut ws).await;
        assert!(reply["target_x"].is_number(), "reply = {}", reply);
        assert!(reply["target_y"].is_number(), "reply = {}", reply);
    }

    ws.close(None).await.unwrap();
}
