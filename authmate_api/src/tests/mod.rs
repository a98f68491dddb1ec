use std::sync::Arc;
use std::sync::Mutex;

use anyhow::Result;
use axum::Router;
use axum::extract::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::post;
use log::Level;
use log::LevelFilter;
use log::Log;
use log::Metadata;
use log::Record;
use nanoid::nanoid;

use crate::AuthMateApi;
use crate::http::types::Credentials;

/// Random credentials, the server stub accepts anything.
pub fn random_credentials() -> Credentials {
    Credentials {
        email: format!("{}@example.com", nanoid!()),
        password: nanoid!(),
    }
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    content_type: &'static str,
    body: String,
    received: Arc<Mutex<Vec<Credentials>>>,
}

/// A stand-in for the authentication service answering every
/// `jwt/create` call with the same canned response.
pub struct AuthStubServer {
    pub url: String,
    received: Arc<Mutex<Vec<Credentials>>>,
}

impl AuthStubServer {
    pub async fn new(status: StatusCode, body: serde_json::Value) -> Result<Self> {
        Self::start(status, "application/json", body.to_string()).await
    }

    pub async fn with_text(status: StatusCode, body: &str) -> Result<Self> {
        Self::start(status, "text/plain", body.to_string()).await
    }

    async fn start(status: StatusCode, content_type: &'static str, body: String) -> Result<Self> {
        let received = Arc::new(Mutex::new(vec![]));
        let state = StubState {
            status,
            content_type,
            body,
            received: received.clone(),
        };
        let app = Router::new()
            .route("/api/auth/jwt/create/", post(jwt_create))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?.to_string();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self {
            url: format!("http://{}", addr),
            received,
        })
    }

    pub fn api(&self) -> AuthMateApi {
        AuthMateApi::new(self.url.clone())
    }

    /// Every credentials payload the stub has seen, in order.
    pub fn received(&self) -> Vec<Credentials> {
        self.received.lock().unwrap().clone()
    }
}

async fn jwt_create(
    State(stub): State<StubState>,
    Json(payload): Json<Credentials>,
) -> impl IntoResponse {
    stub.received.lock().unwrap().push(payload);
    (
        stub.status,
        [(header::CONTENT_TYPE, stub.content_type)],
        stub.body,
    )
}

static LOGGED: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        LOGGED
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Route every log record of this test binary into memory. Safe to call
/// from several tests, only the first call installs the logger.
pub fn capture_logs() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
}

pub fn logged_lines() -> Vec<(Level, String)> {
    LOGGED.lock().unwrap().clone()
}
