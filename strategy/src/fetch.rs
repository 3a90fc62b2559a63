use alloy::primitives::Address;
use subgraph_client::{fetch_all, PagedQuery, SubgraphError, SubgraphQuery, Where};

use crate::{
    config::Options,
    types::{EstateSizeRecord, RentalAsset, Snapshot},
};

// Subgraphs index addresses in lowercase hex; checksummed filter values
// would match nothing.
fn subgraph_form(address: Address) -> String {
    format!("{address:#x}")
}

/// Every land and estate the given addresses have locked in the rentals
/// contract, across all pages.
pub async fn rental_assets<C>(
    client: &C,
    options: &Options,
    addresses: &[Address],
    snapshot: Snapshot,
) -> Result<Vec<RentalAsset>, SubgraphError>
where
    C: SubgraphQuery + ?Sized,
{
    let query = PagedQuery::new("rentalAssets", &["id", "contractAddress", "tokenId", "lessor"])
        .filter(Where::In(
            "contractAddress",
            vec![
                subgraph_form(options.estate_address),
                subgraph_form(options.land_address),
            ],
        ))
        .filter(Where::In(
            "lessor",
            addresses.iter().copied().map(subgraph_form).collect(),
        ))
        .filter(Where::Bool("isClaimed", false))
        .at_block(snapshot.block_number());

    fetch_all(client, &options.rentals_subgraph, query).await
}

/// Parcel counts for the given estate token ids. Zero-sized estates are
/// filtered out at the source.
pub async fn estate_sizes<C>(
    client: &C,
    options: &Options,
    token_ids: Vec<String>,
    snapshot: Snapshot,
) -> Result<Vec<EstateSizeRecord>, SubgraphError>
where
    C: SubgraphQuery + ?Sized,
{
    let query = PagedQuery::new("estates", &["tokenId", "size"])
        .filter(Where::In("tokenId", token_ids))
        .filter(Where::Eq("category", "estate".into()))
        .filter(Where::Gt("size", 0))
        .at_block(snapshot.block_number());

    fetch_all(client, &options.marketplace_subgraph, query).await
}
