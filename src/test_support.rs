/// In-process STAC catalog used by tests
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::Value;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    reply: Value,
    received: Arc<Mutex<Vec<Value>>>,
}

pub struct MockCatalog {
    pub base_url: String,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockCatalog {
    /// Start a catalog answering every `/search` with `status` and `reply`
    pub async fn start(status: StatusCode, reply: Value) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            reply,
            received: received.clone(),
        };
        let app = Router::new()
            .route("/search", post(search))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            received,
        }
    }

    /// Search bodies posted so far
    pub fn requests(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

async fn search(State(state): State<MockState>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    state.received.lock().unwrap().push(body);
    (state.status, Json(state.reply.clone()))
}

/// Address nothing listens on
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";
