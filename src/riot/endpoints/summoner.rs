use tracing::{debug, error};

use crate::error::{AppError, LookupStage};
use crate::riot::client::RiotClient;
use crate::riot::types::{RiotApiError, SummonerDto};

use super::{SUMMONER_BY_PUUID, build_url, require_non_empty};

impl RiotClient {
    /// Get the League of Legends summoner linked to a puuid.
    /// Uses platform routing (euw1, na1, sg2, etc.)
    pub async fn get_summoner_by_puuid(
        &self,
        puuid: &str,
    ) -> Result<Option<SummonerDto>, AppError> {
        require_non_empty("puuid", puuid)?;

        let url = build_url(
            self.platform_base_url(),
            SUMMONER_BY_PUUID,
            &[("encryptedPUUID", puuid)],
        );

        match self.request(&url).await {
            Ok(summoner) => Ok(Some(summoner)),
            Err(RiotApiError::NotFound { .. }) => {
                debug!("[RIOT] no summoner for puuid {}", puuid);
                Ok(None)
            }
            Err(e) => {
                error!("❌ [RIOT] summoner lookup for puuid {} failed: {}", puuid, e);
                Err(AppError::lookup(LookupStage::Summoner, puuid, e))
            }
        }
    }
}
