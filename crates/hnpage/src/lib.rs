//! Paginated HackerNews story lists
//!
//! The **Imperative Shell** over [`hnpage_core`]: it fetches a category's
//! ranked id list, cuts out the requested page and hydrates every id on that
//! page concurrently into a full [`Item`].
//!
//! Network access goes through the [`Fetch`] trait, so callers inject either
//! the HTTP implementation ([`HttpFetcher`]) or their own double in tests.
//!
//! ```rust,no_run
//! use hnpage::{Category, HnClient, HnConfig};
//!
//! # async fn demo() -> hnpage::Result<()> {
//! let client = HnClient::from_config(&HnConfig::default())?;
//! let page = client.get_page(Category::Top, 10, 1).await?;
//!
//! for item in &page.items {
//!     println!("{} {}", item.score, item.title);
//! }
//! if page.has_next_page() {
//!     let _next = client.get_page(Category::Top, 10, page.page_number + 1).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod hn;
mod prelude;

pub use config::HnConfig;
pub use error::{Error, Result};
pub use hn::{
    fetch_ids, fetch_item, fetch_json, fetch_max_item, fetch_updates, fetch_user, get_page,
    hydrate_items, paginate_ids, Fetch, HnClient, HttpFetcher,
};
pub use hnpage_core::hn::{Category, Item, ItemType, ParseCategoryError, Updates, User};
pub use hnpage_core::pagination::{Page, PaginationError};
