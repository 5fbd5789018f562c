use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile document as returned by the user info endpoint.
///
/// The upstream schema changes without notice, so the record stays an open
/// map and every accessor falls back to a default instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileRecord(Map<String, Value>);

impl ProfileRecord {
    /// Field the resolved account id is stored under.
    pub const ACCOUNT_ID_FIELD: &'static str = "userID";

    pub fn with_account_id(mut self, account_id: &str) -> Self {
        self.0.insert(
            Self::ACCOUNT_ID_FIELD.to_string(),
            Value::String(account_id.to_string()),
        );
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn username(&self) -> Option<&str> {
        self.text("username")
    }

    pub fn account_id(&self) -> Option<&str> {
        self.text(Self::ACCOUNT_ID_FIELD)
    }

    /// String value of `field`, if it is a string.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// String value of `field` when present and not empty.
    pub fn non_empty_text(&self, field: &str) -> Option<&str> {
        self.text(field).filter(|value| !value.is_empty())
    }

    pub fn flag(&self, field: &str) -> bool {
        self.get(field).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn count(&self, field: &str) -> i64 {
        self.get(field).and_then(Value::as_i64).unwrap_or(0)
    }

    /// Scalar rendered as text: strings verbatim, numbers and booleans in
    /// their JSON form. Null, arrays and objects yield `None`.
    pub fn scalar(&self, field: &str) -> Option<String> {
        match self.get(field)? {
            Value::String(value) => Some(value.clone()),
            Value::Number(value) => Some(value.to_string()),
            Value::Bool(value) => Some(value.to_string()),
            _ => None,
        }
    }

    pub fn profile_picture_url(&self) -> Option<&str> {
        self.get("hd_profile_pic_url_info")
            .and_then(|info| info.get("url"))
            .and_then(Value::as_str)
    }
}

impl From<Map<String, Value>> for ProfileRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Response of the account lookup endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichmentRecord {
    pub obfuscated_email: Option<String>,
    pub obfuscated_phone: Option<String>,
    pub status_message: Option<String>,
    document: Value,
}

/// What a lookup response means for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentOutcome<'a> {
    /// The endpoint did not match the account.
    NoMatch,
    Contacts {
        email: Option<&'a str>,
        phone: Option<&'a str>,
    },
}

impl EnrichmentRecord {
    pub const NO_USERS_FOUND: &'static str = "No users found";

    pub fn from_document(document: Value) -> Self {
        Self {
            obfuscated_email: non_empty_scalar(document.get("obfuscated_email")),
            obfuscated_phone: non_empty_scalar(document.get("obfuscated_phone")),
            status_message: non_empty_scalar(document.get("message")),
            document,
        }
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn outcome(&self) -> EnrichmentOutcome<'_> {
        if self.status_message.as_deref() == Some(Self::NO_USERS_FOUND) {
            return EnrichmentOutcome::NoMatch;
        }
        EnrichmentOutcome::Contacts {
            email: self.obfuscated_email.as_deref(),
            phone: self.obfuscated_phone.as_deref(),
        }
    }
}

fn non_empty_scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
