//! The lookup pipeline: identity resolution, profile fetch and contact
//! enrichment. Each stage issues at most one request and returns a
//! [`LookupError`] rather than aborting.

mod enrichment;
mod error;
mod pipeline;
mod profile;
mod records;
mod request;
mod resolver;

pub use enrichment::{enrich, signed_body, USER_LOOKUP_ENDPOINT};
pub use error::LookupError;
pub use pipeline::{run_lookup, LookupReport};
pub use profile::{fetch_profile, user_info_endpoint};
pub use records::{EnrichmentOutcome, EnrichmentRecord, ProfileRecord};
pub use request::{LookupRequest, ResolvedIdentity, SearchKind};
pub use resolver::{resolve, validate_account_id, WEB_PROFILE_INFO_ENDPOINT};

use serde_json::Value;
use tracing::warn;

/// The platform answers throttled requests with an HTML page instead of
/// JSON, so an undecodable body is reported as a rate limit.
fn decode_json(body: &str) -> Result<Value, LookupError> {
    serde_json::from_str(body).map_err(|_| LookupError::RateLimited)
}

/// Network-level failures are not told apart from a missing account.
fn transport_failure(stage: &str, error: reqwest::Error) -> LookupError {
    warn!(stage, error = %error, "Request failed before a response was received");
    LookupError::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("<html><body>Please wait a few minutes</body></html>")]
    #[case("")]
    #[case("{\"user\": ")]
    fn test_non_json_body_is_rate_limit(#[case] body: &str) {
        assert_eq!(decode_json(body), Err(LookupError::RateLimited));
    }

    #[test]
    fn test_json_body_decodes() {
        assert_eq!(
            decode_json("{\"status\":\"ok\"}").unwrap(),
            serde_json::json!({"status": "ok"})
        );
    }
}
