#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use instascope::client::ApiClient;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use url::Url;

pub const SESSION_TOKEN: &str = "1234%3Asession%3Atoken";

/// Canned answer for one upstream endpoint.
#[derive(Clone, Debug)]
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn json(value: Value) -> Self {
        Self {
            status: 200,
            body: value.to_string(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self::text(status, "")
    }
}

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

#[derive(Default)]
struct FixtureState {
    web_profile_info: Option<CannedResponse>,
    user_info: Option<CannedResponse>,
    lookup: Option<CannedResponse>,
    requests: Mutex<Vec<RecordedRequest>>,
}

#[derive(Default)]
pub struct FixtureServerBuilder {
    state: FixtureState,
}

impl FixtureServerBuilder {
    pub fn web_profile_info(mut self, response: CannedResponse) -> Self {
        self.state.web_profile_info = Some(response);
        self
    }

    pub fn user_info(mut self, response: CannedResponse) -> Self {
        self.state.user_info = Some(response);
        self
    }

    pub fn lookup(mut self, response: CannedResponse) -> Self {
        self.state.lookup = Some(response);
        self
    }

    pub async fn launch(self) -> FixtureServer {
        let state = Arc::new(self.state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = Router::new().fallback(replay).with_state(state.clone());
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FixtureServer {
            addr,
            state,
            handle,
        }
    }
}

/// Local stand-in for the upstream API. Answers every known endpoint with
/// its canned response and records what it received.
pub struct FixtureServer {
    addr: SocketAddr,
    state: Arc<FixtureState>,
    handle: JoinHandle<()>,
}

impl FixtureServer {
    pub fn builder() -> FixtureServerBuilder {
        FixtureServerBuilder::default()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(Url::parse(&self.base_url()).unwrap()).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, suffix: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path.ends_with(suffix))
            .collect()
    }
}

impl Drop for FixtureServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn replay(
    State(state): State<Arc<FixtureState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: path.clone(),
        query: uri.query().map(str::to_string),
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let canned = if path.ends_with("/web_profile_info/") {
        state.web_profile_info.clone()
    } else if path.ends_with("/lookup/") {
        state.lookup.clone()
    } else if path.ends_with("/info/") {
        state.user_info.clone()
    } else {
        None
    };

    match canned {
        Some(response) => (
            StatusCode::from_u16(response.status).unwrap(),
            response.body,
        ),
        None => (StatusCode::NOT_IMPLEMENTED, format!("no fixture for {path}")),
    }
}

/// Base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
