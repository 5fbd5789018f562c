use super::{decode_json, transport_failure, LookupError, ProfileRecord};
use crate::client::{session_cookie, ApiClient};
use reqwest::header::{COOKIE, USER_AGENT};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

const PROFILE_USER_AGENT: &str = "Instagram 64.0.0.14.96";

pub fn user_info_endpoint(account_id: &str) -> String {
    format!("/api/v1/users/{account_id}/info/")
}

/// Fetches the full profile of `account_id`.
///
/// A 429 is reported as a rate limit; any other unsuccessful status, and any
/// failure to reach the server at all, is reported as [`LookupError::NotFound`].
pub async fn fetch_profile(
    client: &ApiClient,
    account_id: &str,
    session_token: &str,
) -> Result<ProfileRecord, LookupError> {
    debug!(account_id, "Fetching profile");

    let response = client
        .get(&user_info_endpoint(account_id))
        .header(USER_AGENT, PROFILE_USER_AGENT)
        .header(COOKIE, session_cookie(session_token))
        .send()
        .await
        .map_err(|e| transport_failure("profile", e))?;

    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(LookupError::RateLimited);
    }
    if !status.is_success() {
        warn!(account_id, status = status.as_u16(), "Profile request was rejected");
        return Err(LookupError::NotFound);
    }

    let body = response
        .text()
        .await
        .map_err(|e| transport_failure("profile", e))?;
    profile_from(decode_json(&body)?, account_id)
}

fn profile_from(document: Value, account_id: &str) -> Result<ProfileRecord, LookupError> {
    let Value::Object(mut root) = document else {
        return Err(LookupError::NotFound);
    };
    match root.remove("user") {
        Some(Value::Object(user)) if !user.is_empty() => {
            Ok(ProfileRecord::from(user).with_account_id(account_id))
        }
        _ => Err(LookupError::NotFound),
    }
}
