use std::collections::HashMap;

use alloy::primitives::{address, Address};
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Contract addresses, multipliers and subgraph endpoints for one network.
///
/// Callers may pass this explicitly; otherwise it is looked up from the
/// built-in per-network table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub land_address: Address,
    pub estate_address: Address,
    /// Flat score per locked land.
    pub land_multiplier: f64,
    /// Score per parcel of a locked estate.
    pub estate_size_multiplier: f64,
    pub rentals_subgraph: String,
    pub marketplace_subgraph: String,
}

static NETWORKS: Lazy<HashMap<&'static str, Options>> = Lazy::new(|| {
    HashMap::from([(
        // Ethereum mainnet
        "1",
        Options {
            land_address: address!("F87E31492Faf9A91B02Ee0dEAAd50d51d56D5d4d"),
            estate_address: address!("959e104E1a4dB6317fA58F8295F586e1A978c297"),
            land_multiplier: 2000.0,
            estate_size_multiplier: 2000.0,
            rentals_subgraph:
                "https://api.thegraph.com/subgraphs/name/decentraland/rentals-ethereum-mainnet"
                    .into(),
            marketplace_subgraph:
                "https://api.thegraph.com/subgraphs/name/decentraland/marketplace".into(),
        },
    )])
});

/// Built-in configuration for `network`, if any.
pub fn for_network(network: &str) -> Option<&'static Options> {
    NETWORKS.get(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mainnet_is_configured() {
        let options = for_network("1").unwrap();

        assert_ne!(options.land_address, options.estate_address);
        assert!(options.land_multiplier > 0.0);
    }

    #[test]
    fn unknown_network_has_no_entry() {
        assert!(for_network("999").is_none());
    }
}
