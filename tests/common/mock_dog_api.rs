//! Mock Dog CEO server for exercising the HTTP client.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const RANDOM_IMAGE_PATH: &str = "/api/breeds/image/random";

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
}

/// A canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub content_type: &'static str,
    pub delay_ms: u64,
}

impl Default for MockResponse {
    fn default() -> Self {
        Self::success("https://images.dog.ceo/breeds/pug/n02110958_1975.jpg")
    }
}

impl MockResponse {
    /// `status: "success"` envelope carrying `image_url`.
    pub fn success(image_url: &str) -> Self {
        Self {
            status: 200,
            body: serde_json::json!({ "message": image_url, "status": "success" })
                .to_string()
                .into_bytes(),
            content_type: "application/json",
            delay_ms: 0,
        }
    }

    /// In-band API failure, as the real service sends for unknown breeds.
    pub fn api_error(http_status: u16, message: &str) -> Self {
        Self {
            status: http_status,
            body: serde_json::json!({ "message": message, "status": "error", "code": http_status })
                .to_string()
                .into_bytes(),
            content_type: "application/json",
            delay_ms: 0,
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
            content_type: "application/json",
            delay_ms: 0,
        }
    }

    /// Image bytes, served the way the image CDN serves them.
    pub fn image(bytes: Vec<u8>) -> Self {
        Self {
            status: 200,
            body: bytes,
            content_type: "image/png",
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

pub struct MockDogApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockDogApi {
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Queue a response for the next request. Falls back to a pug when empty.
    pub async fn enqueue_response(&self, resp: MockResponse) {
        self.state.responses.lock().await.push_back(resp);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    /// URL of an image hosted on this server under `path`.
    pub fn image_url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Full URL of the random-image endpoint on this server.
    pub fn endpoint(&self) -> String {
        format!("http://{}{}", self.addr, RANDOM_IMAGE_PATH)
    }
}

impl Drop for MockDogApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    state.requests.lock().await.push(CapturedRequest {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
    });

    let mock_resp = state
        .responses
        .lock()
        .await
        .pop_front()
        .unwrap_or_default();

    if mock_resp.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(mock_resp.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(mock_resp.status).unwrap())
        .header("content-type", mock_resp.content_type)
        .body(Body::from(mock_resp.body))
        .unwrap()
}
