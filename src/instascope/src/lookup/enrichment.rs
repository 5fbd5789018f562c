use super::{decode_json, transport_failure, EnrichmentRecord, LookupError};
use crate::client::ApiClient;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{
    ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT,
};
use serde_json::json;
use std::fmt::Write;
use tracing::debug;

pub const USER_LOOKUP_ENDPOINT: &str = "/api/v1/users/lookup/";

const LOOKUP_USER_AGENT: &str = "Instagram 101.0.0.15.120";
const LOOKUP_APP_ID_HEADER: &str = "X-IG-App-ID";
const LOOKUP_APP_ID: &str = "124024574287414";
const LOOKUP_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
const LOOKUP_ACCEPT_ENCODING: &str = "gzip, deflate";
const LOOKUP_ACCEPT_LANGUAGE: &str = "en-US";

// The endpoint only checks the shape of the envelope, not the signature.
const SIGNATURE_PLACEHOLDER: &str = "SIGNATURE";

// Form encoding of the payload: everything except alphanumerics and `_.-~`
// is escaped, spaces become `+` afterwards.
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b' ');

/// Form body sent to the lookup endpoint for `username`.
pub fn signed_body(username: &str) -> String {
    let payload = escape_non_ascii(&json!({ "q": username, "skip_recovery": "1" }).to_string());
    let encoded = utf8_percent_encode(&payload, FORM_VALUE)
        .to_string()
        .replace(' ', "+");
    format!("signed_body={SIGNATURE_PLACEHOLDER}.{encoded}")
}

// Non-ASCII only occurs inside JSON strings, so `\uXXXX` escapes (UTF-16
// units, lowercase hex) keep the document valid and all-ASCII.
fn escape_non_ascii(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for ch in json.chars() {
        if ch.is_ascii() {
            escaped.push(ch);
        } else {
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                let _ = write!(escaped, "\\u{unit:04x}");
            }
        }
    }
    escaped
}

/// Asks the account lookup endpoint for the masked recovery contacts of
/// `username`. No session is attached to this request.
pub async fn enrich(client: &ApiClient, username: &str) -> Result<EnrichmentRecord, LookupError> {
    debug!(username, "Looking up obfuscated contacts");

    let body = signed_body(username);
    let response = client
        .post(USER_LOOKUP_ENDPOINT)
        .header(ACCEPT_LANGUAGE, LOOKUP_ACCEPT_LANGUAGE)
        .header(USER_AGENT, LOOKUP_USER_AGENT)
        .header(CONTENT_TYPE, LOOKUP_CONTENT_TYPE)
        .header(LOOKUP_APP_ID_HEADER, LOOKUP_APP_ID)
        .header(ACCEPT_ENCODING, LOOKUP_ACCEPT_ENCODING)
        .header(CONTENT_LENGTH, body.len().to_string())
        .body(body)
        .send()
        .await
        .map_err(|e| transport_failure("enrich", e))?;

    let body = response
        .text()
        .await
        .map_err(|e| transport_failure("enrich", e))?;
    decode_json(&body).map(EnrichmentRecord::from_document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_signed_body() {
        assert_eq!(
            signed_body("alice"),
            "signed_body=SIGNATURE.%7B%22q%22%3A%22alice%22%2C%22skip_recovery%22%3A%221%22%7D"
        );
    }

    #[rstest]
    #[case("john.doe_1", "%22john.doe_1%22")]
    #[case("a b", "%22a+b%22")]
    #[case("a+b", "%22a%2Bb%22")]
    #[case("a&b=c", "%22a%26b%3Dc%22")]
    #[case("caf\u{e9}", "%22caf%5Cu00e9%22")]
    #[case("\u{1f600}", "%22%5Cud83d%5Cude00%22")]
    fn test_signed_body_escapes_username(#[case] username: &str, #[case] encoded: &str) {
        let body = signed_body(username);
        assert!(
            body.contains(&format!("%3A{encoded}%2C")),
            "unexpected body {body}"
        );
    }
}
