use std::collections::HashMap;

use subgraph_client::{SubgraphError, SubgraphQuery};

use crate::{
    config::Options,
    fetch,
    types::{EnrichedEstate, RentalAsset, Snapshot},
};

/// Resolve the parcel count of each estate from the marketplace subgraph
/// and pair it with the asset.
///
/// An empty estate list issues no fetch at all. Estates the size query does
/// not return (missing, or filtered out as zero-sized) are dropped and score
/// nothing; size records with no matching estate are ignored.
pub async fn resolve_sizes<C>(
    client: &C,
    options: &Options,
    estates: Vec<RentalAsset>,
    snapshot: Snapshot,
) -> Result<Vec<EnrichedEstate>, SubgraphError>
where
    C: SubgraphQuery + ?Sized,
{
    if estates.is_empty() {
        return Ok(Vec::new());
    }

    let token_ids: Vec<String> = estates.iter().map(|estate| estate.token_id.clone()).collect();

    // Token ids are unique per estate upstream; should a duplicate ever
    // appear, the later asset wins.
    let mut by_token: HashMap<String, RentalAsset> = estates
        .into_iter()
        .map(|estate| (estate.token_id.clone(), estate))
        .collect();

    let sizes = fetch::estate_sizes(client, options, token_ids, snapshot).await?;

    let mut enriched = Vec::with_capacity(sizes.len());

    for record in sizes {
        match by_token.remove(&record.token_id) {
            Some(asset) => enriched.push(EnrichedEstate {
                asset,
                size: record.size,
            }),
            None => {
                tracing::debug!(token_id = %record.token_id, "size record with no matching estate")
            }
        }
    }

    Ok(enriched)
}
