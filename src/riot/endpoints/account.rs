use tracing::{debug, error};

use crate::error::{AppError, LookupStage};
use crate::riot::client::RiotClient;
use crate::riot::types::{AccountDto, RiotApiError};

use super::{ACCOUNT_BY_RIOT_ID, build_url, require_non_empty};

impl RiotClient {
    /// Get account by Riot ID (game name + tag line, without the `#`).
    /// Uses regional routing (americas, asia, europe)
    ///
    /// An unknown Riot ID is `Ok(None)`.
    pub async fn get_account_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Option<AccountDto>, AppError> {
        require_non_empty("game_name", game_name)?;
        require_non_empty("tag_line", tag_line)?;

        let url = build_url(
            self.account_base_url(),
            ACCOUNT_BY_RIOT_ID,
            &[("gameName", game_name), ("tagLine", tag_line)],
        );

        match self.request(&url).await {
            Ok(account) => Ok(Some(account)),
            Err(RiotApiError::NotFound { .. }) => {
                debug!("[RIOT] no account for {}#{}", game_name, tag_line);
                Ok(None)
            }
            Err(e) => {
                error!(
                    "❌ [RIOT] account lookup for {}#{} failed: {}",
                    game_name, tag_line, e
                );
                Err(AppError::lookup(
                    LookupStage::Account,
                    format!("{game_name}#{tag_line}"),
                    e,
                ))
            }
        }
    }
}
