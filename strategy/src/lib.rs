//! Voting weight from lands and estates locked in the rentals contract.
//!
//! For each input address the strategy:
//! 1. pages through every unclaimed rental asset the address has locked,
//! 2. splits the assets into lands and estates by issuing contract,
//! 3. resolves each estate's parcel count from the marketplace subgraph,
//! 4. credits the original owner (lessor) a flat multiplier per land and
//!    `size x multiplier` per estate.
//!
//! Data irregularities (truncated pages, unmatched joins, assets from
//! unknown contracts) degrade to lower scores instead of failing the call;
//! only transport failures propagate.

use std::collections::BTreeMap;
use std::str::FromStr;

use alloy::primitives::Address;
use subgraph_client::SubgraphQuery;
use thiserror::Error;

pub mod classify;
pub mod config;
pub mod enrich;
pub mod fetch;
pub mod score;
pub mod types;

pub use config::Options;
pub use types::{EnrichedEstate, EstateSizeRecord, RentalAsset, Scores, Snapshot};

pub const AUTHOR: &str = "fzavalia";
pub const VERSION: &str = "0.1.0";

#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error(transparent)]
    Subgraph(#[from] subgraph_client::SubgraphError),
}

/// Compute the per-address voting weight at `snapshot`.
///
/// Explicit `options` take precedence over the built-in per-network table;
/// with neither, every address scores zero and no queries are issued. The
/// result holds exactly one entry per distinct input address, keyed by its
/// EIP-55 checksummed form.
pub async fn strategy<C>(
    client: &C,
    _space: &str,
    network: &str,
    addresses: &[String],
    options: Option<Options>,
    snapshot: Snapshot,
) -> Result<BTreeMap<String, f64>, StrategyError>
where
    C: SubgraphQuery + ?Sized,
{
    let canonical = parse_addresses(addresses)?;
    let mut scores = Scores::zeroed(&canonical);

    let options = match options.or_else(|| config::for_network(network).cloned()) {
        Some(options) => options,
        None => {
            tracing::debug!(network, "no configuration for network, returning zero scores");
            return Ok(scores.into_checksummed());
        }
    };

    let assets = fetch::rental_assets(client, &options, &canonical, snapshot).await?;
    let (lands, estates) = classify::partition(assets, &options);
    let enriched = enrich::resolve_sizes(client, &options, estates, snapshot).await?;

    score::accumulate(&mut scores, &lands, &enriched, &options);

    Ok(scores.into_checksummed())
}

fn parse_addresses(addresses: &[String]) -> Result<Vec<Address>, StrategyError> {
    addresses
        .iter()
        .map(|address| {
            Address::from_str(address)
                .map_err(|_| StrategyError::InvalidAddress(address.clone()))
        })
        .collect()
}
