use super::{
    enrich, fetch_profile, resolve, EnrichmentRecord, LookupError, LookupRequest, ProfileRecord,
};
use crate::client::ApiClient;
use tracing::info;

/// Everything gathered for one account.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupReport {
    pub profile: ProfileRecord,
    /// Contact enrichment is best-effort; its failure never fails the run.
    pub enrichment: Result<EnrichmentRecord, LookupError>,
}

/// Runs resolve, fetch and enrich one after another.
///
/// Only the first two stages can fail the lookup. The enrichment request is
/// not sent when either of them fails.
pub async fn run_lookup(
    client: &ApiClient,
    request: &LookupRequest,
) -> Result<LookupReport, LookupError> {
    let identity = resolve(
        client,
        &request.search_term,
        request.search_kind,
        &request.session_token,
    )
    .await?;
    info!(account_id = %identity.account_id, "Resolved account");

    let profile = fetch_profile(client, &identity.account_id, &request.session_token).await?;
    info!(account_id = %identity.account_id, "Fetched profile");

    let username = profile.username().unwrap_or_default();
    let enrichment = enrich(client, username).await;
    if let Err(error) = &enrichment {
        info!(%error, "Contact lookup unavailable");
    }

    Ok(LookupReport {
        profile,
        enrichment,
    })
}
