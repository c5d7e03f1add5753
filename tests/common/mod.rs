#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use assistant_gateway::config::Config;
use assistant_gateway::routes::create_router;
use assistant_gateway::state::AppState;
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
};
use serde_json::{Value, json};

/// Canned behaviour for the fake completion service.
#[derive(Clone)]
pub struct MockReply {
    pub status: StatusCode,
    pub body: Value,
    pub delay: Option<Duration>,
}

impl MockReply {
    pub fn text(content: &str) -> Self {
        Self::ok(json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        }))
    }

    pub fn ok(body: Value) -> Self {
        Self { status: StatusCode::OK, body, delay: None }
    }

    pub fn quota_exhausted() -> Self {
        Self {
            status: StatusCode::TOO_MANY_REQUESTS,
            body: json!({"error": {
                "message": "You exceeded your current quota.",
                "type": "insufficient_quota",
                "code": "insufficient_quota"
            }}),
            delay: None,
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self { status, body: json!({"error": {"message": "boom"}}), delay: None }
    }
}

#[derive(Clone)]
struct MockState {
    reply: MockReply,
    seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

pub struct MockUpstream {
    pub addr: SocketAddr,
    seen: Arc<Mutex<Vec<(Option<String>, Value)>>>,
}

impl MockUpstream {
    pub async fn start(reply: MockReply) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let state = MockState { reply, seen: seen.clone() };
        let app = Router::new()
            .route("/v1/chat/completions", post(mock_completions))
            .layer(DefaultBodyLimit::disable())
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { addr, seen }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Request bodies received so far.
    pub fn bodies(&self) -> Vec<Value> {
        self.seen.lock().unwrap().iter().map(|(_, body)| body.clone()).collect()
    }

    pub fn auth_headers(&self) -> Vec<Option<String>> {
        self.seen.lock().unwrap().iter().map(|(auth, _)| auth.clone()).collect()
    }

    pub fn config(&self, timeout_secs: u64) -> Config {
        let base_url = self.base_url();
        Config::from_lookup(move |key| match key {
            "OPENAI_API_KEY" => Some("sk-test".to_string()),
            "OPENAI_BASE_URL" => Some(base_url.clone()),
            "ASSISTANT_TIMEOUT_SECS" => Some(timeout_secs.to_string()),
            _ => None,
        })
        .unwrap()
    }
}

async fn mock_completions(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.seen.lock().unwrap().push((auth, body));
    if let Some(delay) = state.reply.delay {
        tokio::time::sleep(delay).await;
    }
    (state.reply.status, Json(state.reply.body.clone()))
}

pub fn app_for(config: &Config) -> Router {
    let state = Arc::new(AppState::new(config).unwrap());
    create_router().with_state(state)
}
