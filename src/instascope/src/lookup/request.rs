/// How the search term given on the command line should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Username,
    Id,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub search_term: String,
    pub search_kind: SearchKind,
    pub session_token: String,
}

impl LookupRequest {
    pub fn new(
        search_term: impl Into<String>,
        search_kind: SearchKind,
        session_token: impl Into<String>,
    ) -> Self {
        Self {
            search_term: search_term.into(),
            search_kind,
            session_token: session_token.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub account_id: String,
}

impl ResolvedIdentity {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }
}
