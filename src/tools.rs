//! Tool surface handed to the host agent: three lookups callable by name with
//! JSON arguments.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::riot::{AccountDto, AccountWithSummoner, RiotClient, SummonerDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: &'static [&'static str],
}

const DESCRIPTORS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: RiotTools::GET_ACCOUNT,
        description: "Get a Riot account by game name and tag line (without the '#'). \
                      Returns null when no account matches.",
        arguments: &["game_name", "tag_line"],
    },
    ToolDescriptor {
        name: RiotTools::GET_LINKED_ACCOUNT,
        description: "Get the League of Legends account linked to a PUUID. \
                      Returns null when the PUUID has none.",
        arguments: &["puuid"],
    },
    ToolDescriptor {
        name: RiotTools::GET_ACCOUNT_WITH_LINKED,
        description: "Get a Riot account by game name and tag line together with its \
                      League of Legends account under `lol_account`. Returns null unless both exist.",
        arguments: &["game_name", "tag_line"],
    },
];

#[derive(Debug, Clone)]
pub struct RiotTools {
    client: Arc<RiotClient>,
}

impl RiotTools {
    pub const GET_ACCOUNT: &'static str = "get_account";
    pub const GET_LINKED_ACCOUNT: &'static str = "get_linked_account";
    pub const GET_ACCOUNT_WITH_LINKED: &'static str = "get_account_with_linked";

    pub fn new(client: Arc<RiotClient>) -> Self {
        Self { client }
    }

    pub fn descriptors() -> &'static [ToolDescriptor] {
        DESCRIPTORS
    }

    pub async fn get_account(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Option<AccountDto>, AppError> {
        self.client.get_account_by_riot_id(game_name, tag_line).await
    }

    pub async fn get_linked_account(&self, puuid: &str) -> Result<Option<SummonerDto>, AppError> {
        self.client.get_summoner_by_puuid(puuid).await
    }

    pub async fn get_account_with_linked(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<Option<AccountWithSummoner>, AppError> {
        self.client
            .get_account_with_summoner(game_name, tag_line)
            .await
    }

    /// Run the tool named `name`. Absent results are `Value::Null`.
    pub async fn call(&self, name: &str, arguments: Value) -> Result<Value, AppError> {
        tracing::debug!("[TOOLS] call {} with {}", name, arguments);

        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(AppError::InvalidArgument(format!(
                    "arguments must be a JSON object, got {other}"
                )));
            }
        };

        match name {
            Self::GET_ACCOUNT => {
                let game_name = string_arg(&arguments, "game_name")?;
                let tag_line = string_arg(&arguments, "tag_line")?;
                to_value(self.get_account(game_name, tag_line).await?)
            }
            Self::GET_LINKED_ACCOUNT => {
                let puuid = string_arg(&arguments, "puuid")?;
                to_value(self.get_linked_account(puuid).await?)
            }
            Self::GET_ACCOUNT_WITH_LINKED => {
                let game_name = string_arg(&arguments, "game_name")?;
                let tag_line = string_arg(&arguments, "tag_line")?;
                to_value(self.get_account_with_linked(game_name, tag_line).await?)
            }
            _ => Err(AppError::UnknownTool(name.to_string())),
        }
    }
}

fn string_arg<'a>(arguments: &'a Map<String, Value>, name: &str) -> Result<&'a str, AppError> {
    match arguments.get(name) {
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(AppError::InvalidArgument(format!("{name} must be a string"))),
        None => Err(AppError::InvalidArgument(format!("{name} is required"))),
    }
}

fn to_value<T: Serialize>(result: Option<T>) -> Result<Value, AppError> {
    Ok(serde_json::to_value(result)?)
}
