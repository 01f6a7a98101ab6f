use hnpage_core::hn::{Category, Item};
use hnpage_core::pagination::{page_window, validate_request, Page};

use super::{fetch_ids, hydrate_items, Fetch};
use crate::prelude::*;

/// Fetch one page of fully hydrated stories for a category.
///
/// `page` is 1-indexed. A page that starts beyond the end of the ranking is
/// returned empty, with `total_results` still set, rather than as an error.
pub async fn get_page<F: Fetch>(
    fetcher: &F,
    category: Category,
    limit: usize,
    page: usize,
) -> Result<Page<Item>> {
    // Invalid arguments never cost a round trip
    validate_request(limit, page)?;

    let ids = fetch_ids(fetcher, category).await?;
    let output = paginate_ids(fetcher, &ids, limit, page).await?;

    info!(
        "Fetched {} {category} stories for page {page} ({} total)",
        output.len(),
        output.total_results
    );

    Ok(output)
}

/// Hydrate the `page`-th window of an already fetched, ranked id list
pub async fn paginate_ids<F: Fetch>(
    fetcher: &F,
    ids: &[u64],
    limit: usize,
    page: usize,
) -> Result<Page<Item>> {
    let total_results = ids.len();

    let Some(window) = page_window(total_results, limit, page)? else {
        debug!("Page {page} is past the last of {total_results} results");
        return Ok(Page::empty(limit, page, total_results));
    };

    let items = hydrate_items(fetcher, &ids[window]).await?;

    Ok(Page::new(items, limit, page, total_results))
}
