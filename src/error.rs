use std::fmt;

use thiserror::Error;

use crate::riot::types::RiotApiError;

/// Which step of a lookup talked to Riot when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStage {
    Account,
    Summoner,
}

impl fmt::Display for LookupStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account => write!(f, "account"),
            Self::Summoner => write!(f, "summoner"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Unable to encode tool result: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("{stage} lookup for {target} failed: {source}")]
    Lookup {
        stage: LookupStage,
        target: String,
        #[source]
        source: RiotApiError,
    },
}

impl AppError {
    /// Wrap a requester failure with the lookup it happened in.
    ///
    /// A missing key is a configuration fault rather than an upstream one.
    pub fn lookup(stage: LookupStage, target: impl Into<String>, source: RiotApiError) -> Self {
        match source {
            RiotApiError::MissingApiKey => Self::Config("RIOT_API_KEY must be set".into()),
            source => Self::Lookup {
                stage,
                target: target.into(),
                source,
            },
        }
    }

    pub fn stage(&self) -> Option<LookupStage> {
        match self {
            Self::Lookup { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    pub fn riot_error(&self) -> Option<&RiotApiError> {
        match self {
            Self::Lookup { source, .. } => Some(source),
            _ => None,
        }
    }
}
