use crate::constants::SESSION_COOKIE_NAME;
use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder};
use url::Url;

/// Thin wrapper over a `reqwest::Client` bound to one API base URL.
///
/// Every stage of the lookup builds its own request from here, so no header
/// or cookie leaks from one call into the next.
pub struct ApiClient {
    base_uri: String,
    pub client: Client,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_uri: base_url.as_str().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn get_url(&self, path: &str) -> String {
        format!("{}{}", self.base_uri, path)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.get_url(path))
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.get_url(path))
    }
}

/// `Cookie` header value carrying the caller's session token.
pub fn session_cookie(session_token: &str) -> String {
    format!("{SESSION_COOKIE_NAME}={session_token}")
}
