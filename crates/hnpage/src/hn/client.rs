use hnpage_core::hn::{Category, Item, Updates, User};
use hnpage_core::pagination::Page;

use super::{
    fetch_ids, fetch_item, fetch_max_item, fetch_updates, fetch_user, get_page, hydrate_items,
    paginate_ids, Fetch, HttpFetcher,
};
use crate::config::HnConfig;
use crate::prelude::*;

/// Entry point for callers that render HackerNews listings.
///
/// Holds no state besides the injected fetcher, so every call is independent.
#[derive(Debug, Clone)]
pub struct HnClient<F = HttpFetcher> {
    fetcher: F,
}

impl HnClient<HttpFetcher> {
    pub fn from_config(config: &HnConfig) -> Result<Self> {
        Ok(Self::new(HttpFetcher::from_config(config)?))
    }

    pub fn from_env() -> Result<Self> {
        Self::from_config(&HnConfig::from_env()?)
    }
}

impl<F: Fetch> HnClient<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub async fn get_page(
        &self,
        category: Category,
        limit: usize,
        page: usize,
    ) -> Result<Page<Item>> {
        get_page(&self.fetcher, category, limit, page).await
    }

    pub async fn paginate_ids(&self, ids: &[u64], limit: usize, page: usize) -> Result<Page<Item>> {
        paginate_ids(&self.fetcher, ids, limit, page).await
    }

    pub async fn list_ids(&self, category: Category) -> Result<Vec<u64>> {
        fetch_ids(&self.fetcher, category).await
    }

    pub async fn hydrate(&self, ids: &[u64]) -> Result<Vec<Item>> {
        hydrate_items(&self.fetcher, ids).await
    }

    pub async fn fetch_item(&self, id: u64) -> Result<Item> {
        fetch_item(&self.fetcher, id).await
    }

    pub async fn fetch_user(&self, id: &str) -> Result<User> {
        fetch_user(&self.fetcher, id).await
    }

    pub async fn fetch_max_item(&self) -> Result<u64> {
        fetch_max_item(&self.fetcher).await
    }

    pub async fn fetch_updates(&self) -> Result<Updates> {
        fetch_updates(&self.fetcher).await
    }
}
