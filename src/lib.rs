//! Riot account lookups exposed as callable tools.
//!
//! The crate resolves a Riot ID (`gameName#tagLine`) into its account record,
//! the League of Legends summoner behind a PUUID, or both at once.

pub mod config;
pub mod error;
pub mod logging;
pub mod riot;
pub mod tools;

pub use config::Config;
pub use error::{AppError, LookupStage};
pub use tools::RiotTools;
