use super::{decode_json, transport_failure, LookupError, ResolvedIdentity, SearchKind};
use crate::client::{session_cookie, ApiClient};
use reqwest::header::{COOKIE, USER_AGENT};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

pub const WEB_PROFILE_INFO_ENDPOINT: &str = "/api/v1/users/web_profile_info/";

const WEB_USER_AGENT: &str = "iphone_ua";
const WEB_APP_ID_HEADER: &str = "x-ig-app-id";
const WEB_APP_ID: &str = "936619743392459";

/// Turns the search term into the numeric account id the profile endpoint
/// expects.
///
/// Ids are only checked for shape here; whether the account exists is left
/// to the profile fetch.
pub async fn resolve(
    client: &ApiClient,
    term: &str,
    kind: SearchKind,
    session_token: &str,
) -> Result<ResolvedIdentity, LookupError> {
    match kind {
        SearchKind::Id => validate_account_id(term),
        SearchKind::Username => resolve_username(client, term, session_token).await,
    }
}

/// Accepts non-empty decimal strings of any length and returns them unchanged.
pub fn validate_account_id(term: &str) -> Result<ResolvedIdentity, LookupError> {
    if !term.is_empty() && term.bytes().all(|b| b.is_ascii_digit()) {
        Ok(ResolvedIdentity::new(term))
    } else {
        Err(LookupError::InvalidId)
    }
}

async fn resolve_username(
    client: &ApiClient,
    username: &str,
    session_token: &str,
) -> Result<ResolvedIdentity, LookupError> {
    debug!(username, "Resolving username to account id");

    let response = client
        .get(WEB_PROFILE_INFO_ENDPOINT)
        .query(&[("username", username)])
        .header(USER_AGENT, WEB_USER_AGENT)
        .header(WEB_APP_ID_HEADER, WEB_APP_ID)
        .header(COOKIE, session_cookie(session_token))
        .send()
        .await
        .map_err(|e| transport_failure("resolve", e))?;

    if response.status() == StatusCode::NOT_FOUND {
        return Err(LookupError::UserNotFound);
    }

    let body = response
        .text()
        .await
        .map_err(|e| transport_failure("resolve", e))?;
    let document = decode_json(&body)?;

    account_id_from(&document)
        .map(ResolvedIdentity::new)
        .ok_or(LookupError::MalformedResponse)
}

fn account_id_from(document: &Value) -> Option<String> {
    match document.pointer("/data/user/id")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}
