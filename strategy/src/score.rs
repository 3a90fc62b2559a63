use crate::{
    config::Options,
    types::{EnrichedEstate, RentalAsset, Scores},
};

/// Fold classified assets into the score map. Pure, no I/O.
///
/// Each land credits its lessor a flat multiplier; each enriched estate
/// credits its lessor `size x estate_size_multiplier`. The map's key set
/// never grows: lessors outside it are dropped by `Scores::add`.
pub fn accumulate(
    scores: &mut Scores,
    lands: &[RentalAsset],
    estates: &[EnrichedEstate],
    options: &Options,
) {
    for land in lands {
        scores.add(land.lessor, options.land_multiplier);
    }

    for estate in estates {
        scores.add(
            estate.asset.lessor,
            estate.size as f64 * options.estate_size_multiplier,
        );
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, Address};

    use super::*;

    const X: Address = address!("1111111111111111111111111111111111111111");
    const Y: Address = address!("2222222222222222222222222222222222222222");

    fn options() -> Options {
        Options {
            land_address: address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
            estate_address: address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"),
            land_multiplier: 2000.0,
            estate_size_multiplier: 2000.0,
            rentals_subgraph: "rentals".into(),
            marketplace_subgraph: "marketplace".into(),
        }
    }

    fn land(lessor: Address) -> RentalAsset {
        RentalAsset {
            id: "land".into(),
            contract_address: options().land_address,
            token_id: "1".into(),
            lessor,
        }
    }

    fn estate(lessor: Address, size: u64) -> EnrichedEstate {
        EnrichedEstate {
            asset: RentalAsset {
                id: "estate".into(),
                contract_address: options().estate_address,
                token_id: "7".into(),
                lessor,
            },
            size,
        }
    }

    #[test]
    fn lands_score_the_flat_multiplier() {
        let mut scores = Scores::zeroed(&[X]);

        accumulate(&mut scores, &[land(X), land(X)], &[], &options());

        assert_eq!(scores.get(&X), Some(4000.0));
    }

    #[test]
    fn estates_score_size_times_multiplier() {
        let mut scores = Scores::zeroed(&[X]);

        accumulate(&mut scores, &[], &[estate(X, 3)], &options());

        assert_eq!(scores.get(&X), Some(6000.0));
    }

    #[test]
    fn lands_and_estates_add_up_per_lessor() {
        let mut scores = Scores::zeroed(&[X, Y]);

        accumulate(&mut scores, &[land(X)], &[estate(Y, 5)], &options());

        assert_eq!(scores.get(&X), Some(2000.0));
        assert_eq!(scores.get(&Y), Some(10000.0));
    }

    #[test]
    fn unknown_lessor_does_not_extend_the_map() {
        let mut scores = Scores::zeroed(&[X]);

        accumulate(&mut scores, &[land(Y)], &[], &options());

        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get(&X), Some(0.0));
    }
}
