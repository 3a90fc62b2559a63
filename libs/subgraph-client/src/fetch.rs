use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{client::SubgraphQuery, error::SubgraphError, query::PagedQuery};

/// Fetch every page of `query` from `endpoint`, accumulating rows in
/// request order.
///
/// The offset only advances after a full page. Pagination ends on the first
/// page shorter than `query.first`, or on a response whose root key is
/// missing, not a list, or undecodable; rows gathered up to that point are
/// returned, not discarded. Executor failures propagate.
pub async fn fetch_all<T, C>(
    client: &C,
    endpoint: &str,
    query: PagedQuery,
) -> Result<Vec<T>, SubgraphError>
where
    T: DeserializeOwned,
    C: SubgraphQuery + ?Sized,
{
    let mut query = query;
    let mut rows: Vec<T> = Vec::new();

    loop {
        let data = client.execute(endpoint, &query).await?;

        let page = match data.get(query.root).and_then(Value::as_array) {
            Some(list) => list,
            None => {
                tracing::debug!(root = query.root, "missing result list, ending pagination");
                break;
            }
        };

        let count = page.len();

        let decoded: Vec<T> = match serde_json::from_value(Value::Array(page.clone())) {
            Ok(decoded) => decoded,
            Err(err) => {
                tracing::warn!(root = query.root, %err, "undecodable page, ending pagination");
                break;
            }
        };

        rows.extend(decoded);

        if count < query.first {
            break;
        }

        query.skip += query.first;
    }

    Ok(rows)
}
