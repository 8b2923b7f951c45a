use std::error::Error as ErrorT;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Boxed cause of a transport level failure.
pub type BoxError = Box<dyn ErrorT + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum RiotApiError {
    #[error("RIOT_API_KEY is not set")]
    MissingApiKey,

    #[error("Resource not found: {url}")]
    NotFound { url: String },

    #[error("Rate limit exceeded. Retry after: {retry_after} seconds")]
    RateLimitExceeded { retry_after: String },

    #[error("Invalid or missing API key")]
    Unauthorized,

    #[error("Riot API server error: {0}")]
    ServerError(StatusCode),

    #[error("HTTP status error: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("Invalid JSON response from Riot API: {0}")]
    InvalidResponse(serde_json::Error),

    #[error("Request to Riot API failed: {0}")]
    RequestFailed(BoxError),
}

/// A call to Riot API can either result in a success with the success type or fail with a [`RiotApiError`].
pub type RiotApiResponse<T> = Result<T, RiotApiError>;

// ============================================================================
// Account-v1
// ============================================================================

/// Account record as returned by Riot. Every field besides `puuid` is kept
/// verbatim, explicit nulls included.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AccountDto {
    pub puuid: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl AccountDto {
    pub fn game_name(&self) -> Option<&str> {
        self.fields.get("gameName").and_then(Value::as_str)
    }

    pub fn tag_line(&self) -> Option<&str> {
        self.fields.get("tagLine").and_then(Value::as_str)
    }
}

// ============================================================================
// Summoner-v4
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SummonerDto {
    pub puuid: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl SummonerDto {
    pub fn profile_icon_id(&self) -> Option<i64> {
        self.fields.get("profileIconId").and_then(Value::as_i64)
    }

    pub fn revision_date(&self) -> Option<i64> {
        self.fields.get("revisionDate").and_then(Value::as_i64)
    }

    pub fn summoner_level(&self) -> Option<i64> {
        self.fields.get("summonerLevel").and_then(Value::as_i64)
    }
}

// ============================================================================
// Composite
// ============================================================================

/// Account data enriched with the League of Legends summoner behind its puuid.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AccountWithSummoner {
    #[serde(flatten)]
    pub account: AccountDto,
    pub lol_account: SummonerDto,
}

impl AccountWithSummoner {
    pub fn new(account: AccountDto, lol_account: SummonerDto) -> Self {
        Self {
            account,
            lol_account,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn account_keeps_unknown_fields() {
        let account: AccountDto = serde_json::from_value(json!({
            "puuid": "P1",
            "gameName": "Chalop",
            "tagLine": "3012",
            "region": "asia"
        }))
        .unwrap();

        assert_eq!(account.game_name(), Some("Chalop"));
        assert_eq!(account.tag_line(), Some("3012"));
        assert_eq!(account.fields.get("region"), Some(&json!("asia")));
    }

    #[test]
    fn composite_serializes_flat_account_and_nested_summoner() {
        let account: AccountDto = serde_json::from_value(json!({
            "puuid": "P1",
            "gameName": "Chalop",
            "tagLine": "3012"
        }))
        .unwrap();
        let summoner: SummonerDto = serde_json::from_value(json!({
            "puuid": "P1",
            "profileIconId": 29,
            "revisionDate": 1700000000000_i64,
            "summonerLevel": 412
        }))
        .unwrap();

        let value = serde_json::to_value(AccountWithSummoner::new(account, summoner)).unwrap();

        assert_eq!(
            value,
            json!({
                "puuid": "P1",
                "gameName": "Chalop",
                "tagLine": "3012",
                "lol_account": {
                    "puuid": "P1",
                    "profileIconId": 29,
                    "revisionDate": 1700000000000_i64,
                    "summonerLevel": 412
                }
            })
        );
    }

    #[test]
    fn account_fields_round_trip_untouched() {
        for raw in [
            json!({ "puuid": "P1" }),
            json!({ "puuid": "P1", "gameName": null, "tagLine": "3012" }),
        ] {
            let account: AccountDto = serde_json::from_value(raw.clone()).unwrap();

            assert_eq!(serde_json::to_value(&account).unwrap(), raw);
        }
    }

    #[test]
    fn explicit_null_name_is_kept_but_reads_as_none() {
        let account: AccountDto =
            serde_json::from_value(json!({ "puuid": "P1", "gameName": null })).unwrap();

        assert_eq!(account.game_name(), None);
        assert_eq!(account.fields.get("gameName"), Some(&Value::Null));
    }
}
