use tracing::warn;

use crate::error::AppError;

use super::client::RiotClient;
use super::types::AccountWithSummoner;

impl RiotClient {
    /// Resolve a Riot ID then the summoner behind its puuid.
    ///
    /// Both records must exist: an account without summoner is reported as
    /// `Ok(None)` and its account data is dropped. Errors keep the stage they
    /// come from (see [`AppError::stage`]).
    pub async fn get_account_with_summoner(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Option<AccountWithSummoner>, AppError> {
        let Some(account) = self.get_account_by_riot_id(game_name, tag_line).await? else {
            return Ok(None);
        };

        let Some(summoner) = self.get_summoner_by_puuid(&account.puuid).await? else {
            warn!(
                "⚠️ [RIOT] {}#{} has no League of Legends account (puuid {}), partial result dropped",
                game_name, tag_line, account.puuid
            );
            return Ok(None);
        };

        Ok(Some(AccountWithSummoner::new(account, summoner)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::StatusCode;
    use serde_json::json;

    use crate::config::Config;
    use crate::error::{AppError, LookupStage};
    use crate::riot::client::RiotClient;
    use crate::riot::stub::StubTransport;
    use crate::riot::transport::HttpResponse;
    use crate::riot::types::RiotApiError;

    const ACCOUNT: &str = r#"{"puuid":"P1","gameName":"Chalop","tagLine":"3012"}"#;
    const SUMMONER: &str = r#"{"puuid":"P1","profileIconId":29,"summonerLevel":412}"#;

    fn client(stub: &Arc<StubTransport>) -> RiotClient {
        RiotClient::with_transport(
            &Config::with_base_url("RGAPI-TEST", "http://riot.test"),
            stub.clone(),
        )
    }

    #[tokio::test]
    async fn merges_account_and_summoner() {
        let stub = StubTransport::new();
        stub.push(HttpResponse::new(StatusCode::OK, ACCOUNT));
        stub.push(HttpResponse::new(StatusCode::OK, SUMMONER));

        let composite = client(&stub)
            .get_account_with_summoner("Chalop", "3012")
            .await
            .unwrap()
            .expect("both records exist");

        assert_eq!(
            serde_json::to_value(&composite).unwrap(),
            json!({
                "puuid": "P1",
                "gameName": "Chalop",
                "tagLine": "3012",
                "lol_account": { "puuid": "P1", "profileIconId": 29, "summonerLevel": 412 }
            })
        );

        let calls = stub.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[1].url.ends_with("/lol/summoner/v4/summoners/by-puuid/P1"));
    }

    #[tokio::test]
    async fn unknown_account_stops_after_first_call() {
        let stub = StubTransport::new();
        stub.push(HttpResponse::new(StatusCode::NOT_FOUND, ""));

        let res = client(&stub)
            .get_account_with_summoner("nobody", "0000")
            .await
            .unwrap();

        assert!(res.is_none());
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn missing_summoner_suppresses_partial_account() {
        let stub = StubTransport::new();
        stub.push(HttpResponse::new(StatusCode::OK, ACCOUNT));
        stub.push(HttpResponse::new(StatusCode::NOT_FOUND, ""));

        let res = client(&stub)
            .get_account_with_summoner("Chalop", "3012")
            .await
            .unwrap();

        assert!(res.is_none());
        assert_eq!(stub.call_count(), 2);
    }

    #[tokio::test]
    async fn account_stage_failure_is_identified() {
        let stub = StubTransport::new();
        stub.push(HttpResponse::new(StatusCode::TOO_MANY_REQUESTS, "").with_retry_after("5"));

        let err = client(&stub)
            .get_account_with_summoner("Chalop", "3012")
            .await
            .unwrap_err();

        assert_eq!(err.stage(), Some(LookupStage::Account));
        assert!(matches!(
            err.riot_error(),
            Some(RiotApiError::RateLimitExceeded { retry_after }) if retry_after == "5"
        ));
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn summoner_stage_failure_is_identified() {
        let stub = StubTransport::new();
        stub.push(HttpResponse::new(StatusCode::OK, ACCOUNT));
        stub.push(HttpResponse::new(StatusCode::OK, "not json"));

        let err = client(&stub)
            .get_account_with_summoner("Chalop", "3012")
            .await
            .unwrap_err();

        assert_eq!(err.stage(), Some(LookupStage::Summoner));
        assert!(matches!(
            err.riot_error(),
            Some(RiotApiError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn invalid_arguments_are_rejected_upfront() {
        let stub = StubTransport::new();

        let res = client(&stub).get_account_with_summoner("", "3012").await;

        assert!(matches!(res, Err(AppError::InvalidArgument(_))));
        assert_eq!(stub.call_count(), 0);
    }
}
