pub mod client;
pub mod endpoints;
pub mod lookup;
pub mod metrics;
pub mod region;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod stub;

pub use client::RiotClient;
pub use region::{Platform, Region};
pub use types::{AccountDto, AccountWithSummoner, RiotApiError, RiotApiResponse, SummonerDto};
