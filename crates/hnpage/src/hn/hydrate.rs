use futures::future::try_join_all;
use hnpage_core::hn::Item;

use super::{fetch_item, Fetch};
use crate::prelude::*;

/// Fetch the full item for every id concurrently.
///
/// One request per id is in flight at once, so callers bound the fan-out by
/// the length of `ids`. The output keeps the order of `ids` regardless of
/// completion order. The first failure aborts the whole batch: the remaining
/// requests are dropped and no partial result is returned.
pub async fn hydrate_items<F: Fetch>(fetcher: &F, ids: &[u64]) -> Result<Vec<Item>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    debug!("Hydrating {} items", ids.len());

    try_join_all(ids.iter().map(|&id| fetch_item(fetcher, id)))
        .await
        .inspect_err(|e| warn!("Hydration of {} items aborted: {e}", ids.len()))
}
