use crate::{config::Options, types::RentalAsset};

/// Partition fetched assets into lands and estates by issuing contract, in
/// one pass, preserving fetch order.
///
/// Contract addresses were parsed from hex on decode, so the comparison is
/// case-insensitive by construction. Assets from any other contract are
/// dropped and take no part in scoring.
pub fn partition(
    assets: Vec<RentalAsset>,
    options: &Options,
) -> (Vec<RentalAsset>, Vec<RentalAsset>) {
    let mut lands = Vec::new();
    let mut estates = Vec::new();

    for asset in assets {
        if asset.contract_address == options.land_address {
            lands.push(asset);
        } else if asset.contract_address == options.estate_address {
            estates.push(asset);
        } else {
            tracing::debug!(
                contract = %asset.contract_address,
                id = %asset.id,
                "asset from unrecognized contract, skipping"
            );
        }
    }

    (lands, estates)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, Address};

    use super::*;

    const LAND: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
    const ESTATE: Address = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");

    fn options() -> Options {
        Options {
            land_address: LAND,
            estate_address: ESTATE,
            land_multiplier: 2000.0,
            estate_size_multiplier: 2000.0,
            rentals_subgraph: "rentals".into(),
            marketplace_subgraph: "marketplace".into(),
        }
    }

    fn asset(contract: Address, token_id: &str) -> RentalAsset {
        RentalAsset {
            id: format!("{contract}-{token_id}"),
            contract_address: contract,
            token_id: token_id.into(),
            lessor: address!("1111111111111111111111111111111111111111"),
        }
    }

    #[test]
    fn splits_lands_and_estates() {
        let assets = vec![asset(LAND, "1"), asset(ESTATE, "2"), asset(LAND, "3")];

        let (lands, estates) = partition(assets, &options());

        assert_eq!(lands.len(), 2);
        assert_eq!(estates.len(), 1);
        assert_eq!(estates[0].token_id, "2");
    }

    #[test]
    fn drops_assets_from_other_contracts() {
        let other = address!("cccccccccccccccccccccccccccccccccccccccc");

        let (lands, estates) = partition(vec![asset(other, "9")], &options());

        assert!(lands.is_empty());
        assert!(estates.is_empty());
    }
}
