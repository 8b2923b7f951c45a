//! Riot REST routes and the URL templating shared by every lookup.

use crate::error::AppError;

mod account;
mod summoner;

/// Account-v1, served by the regional routing host.
pub const ACCOUNT_BY_RIOT_ID: &str = "/riot/account/v1/accounts/by-riot-id/{gameName}/{tagLine}";

/// Summoner-v4, served by the platform routing host.
pub const SUMMONER_BY_PUUID: &str = "/lol/summoner/v4/summoners/by-puuid/{encryptedPUUID}";

/// Fill `template` with percent-encoded `params` and prefix it with `base_url`.
///
/// Every parameter is encoded as a single path segment, so `#`, spaces and
/// slashes never leak into the route structure.
pub fn build_url(base_url: &str, template: &str, params: &[(&str, &str)]) -> String {
    let path = params.iter().fold(template.to_string(), |path, (name, value)| {
        path.replace(&format!("{{{name}}}"), &urlencoding::encode(value))
    });

    format!("{base_url}{path}")
}

/// Reject empty caller input before any request is issued.
pub(crate) fn require_non_empty(name: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::InvalidArgument(format!(
            "{name} must be a non-empty string"
        )));
    }

    Ok(())
}
