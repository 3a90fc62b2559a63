use std::collections::BTreeMap;

use alloy::primitives::Address;
use serde::Deserialize;

/// A land or estate currently locked in the rentals contract and not yet
/// claimed back by its owner.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalAsset {
    pub id: String,
    pub contract_address: Address,
    pub token_id: String,
    pub lessor: Address,
}

/// Parcel count of one estate, as indexed by the marketplace subgraph.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstateSizeRecord {
    pub token_id: String,
    pub size: u64,
}

/// An estate rental asset paired with its resolved parcel count.
#[derive(Debug, Clone)]
pub struct EnrichedEstate {
    pub asset: RentalAsset,
    pub size: u64,
}

/// Block pin applied to every subgraph query of one invocation.
///
/// A numeric snapshot guarantees all pages of all fetches observe the same
/// chain state. `Latest` lets each page read the current head, which may
/// drift between pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Snapshot {
    #[default]
    Latest,
    Block(u64),
}

impl Snapshot {
    pub fn block_number(self) -> Option<u64> {
        match self {
            Snapshot::Latest => None,
            Snapshot::Block(number) => Some(number),
        }
    }
}

/// Ordered per-address score map.
///
/// Keys are `Address` values, so entries that differ only in source casing
/// collapse into one. The key set is fixed at construction: increments for
/// addresses outside it are dropped, never inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scores(BTreeMap<Address, f64>);

impl Scores {
    /// One zero-valued entry per distinct input address.
    pub fn zeroed(addresses: &[Address]) -> Self {
        Self(addresses.iter().map(|address| (*address, 0.0)).collect())
    }

    /// Add `delta` to an existing entry.
    pub fn add(&mut self, address: Address, delta: f64) {
        match self.0.get_mut(&address) {
            Some(score) => *score += delta,
            None => {
                tracing::debug!(%address, "lessor outside the queried address set, skipping")
            }
        }
    }

    pub fn get(&self, address: &Address) -> Option<f64> {
        self.0.get(address).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render with EIP-55 checksummed keys, the casing score consumers
    /// expect.
    pub fn into_checksummed(self) -> BTreeMap<String, f64> {
        self.0
            .into_iter()
            .map(|(address, score)| (address.to_checksum(None), score))
            .collect()
    }
}
