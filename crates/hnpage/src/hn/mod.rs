use std::future::Future;

use hnpage_core::hn::{
    api_url, item_path, user_path, Category, Item, Updates, User, MAX_ITEM_PATH, UPDATES_PATH,
};
use serde::de::DeserializeOwned;

use crate::config::HnConfig;
use crate::prelude::*;

pub mod client;
pub mod hydrate;
pub mod list_items;

#[cfg(test)]
pub(crate) mod mock;

pub use client::HnClient;
pub use hydrate::hydrate_items;
pub use list_items::{get_page, paginate_ids};

/// Raw access to HackerNews API resources.
///
/// `path` is relative to the API root and carries no `.json` suffix, e.g.
/// `topstories` or `item/8863`. Implementations return the undecoded body.
pub trait Fetch: Sync {
    fn get(&self, path: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// [`Fetch`] over HTTPS with a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &HnConfig) -> Result<Self> {
        Ok(Self::new(config.build_client()?, config.base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Fetch for HttpFetcher {
    async fn get(&self, path: &str) -> Result<Vec<u8>> {
        let url = api_url(&self.base_url, path);
        debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(f!("Failed to fetch {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Network(f!("Failed to read body of {url}: {e}")))?;

        Ok(body.to_vec())
    }
}

/// Fetch a resource and decode its JSON body
pub async fn fetch_json<F: Fetch, T: DeserializeOwned>(fetcher: &F, path: &str) -> Result<T> {
    let body = fetcher.get(path).await?;
    serde_json::from_slice(&body).map_err(|e| Error::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })
}

/// Ranked story ids for a category, in upstream order
pub async fn fetch_ids<F: Fetch>(fetcher: &F, category: Category) -> Result<Vec<u64>> {
    let ids: Vec<u64> = fetch_json(fetcher, category.path()).await?;
    debug!("{category} stories: {} ids", ids.len());
    Ok(ids)
}

pub async fn fetch_item<F: Fetch>(fetcher: &F, id: u64) -> Result<Item> {
    fetch_json(fetcher, &item_path(id)).await
}

pub async fn fetch_user<F: Fetch>(fetcher: &F, id: &str) -> Result<User> {
    fetch_json(fetcher, &user_path(id)).await
}

/// The current largest item id
pub async fn fetch_max_item<F: Fetch>(fetcher: &F) -> Result<u64> {
    fetch_json(fetcher, MAX_ITEM_PATH).await
}

pub async fn fetch_updates<F: Fetch>(fetcher: &F) -> Result<Updates> {
    fetch_json(fetcher, UPDATES_PATH).await
}

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[cfg(test)]
mod tests {
    use super::mock::MockFetcher;
    use super::*;
    use hnpage_core::hn::ItemType;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn fetcher_for(server: &MockServer) -> HttpFetcher {
        let config = HnConfig::default().with_base_url(f!("{}/v0", server.uri()));
        HttpFetcher::from_config(&config).unwrap()
    }

    #[tokio::test]
    async fn test_http_fetcher_requests_json_suffix() {
        init_logger();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v0/topstories.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([3, 1, 2])))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server).await;
        let ids = fetch_ids(&fetcher, Category::Top).await.unwrap();

        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_http_fetcher_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v0/item/7.json"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server).await;
        let err = fetch_item(&fetcher, 7).await.unwrap_err();

        match err {
            Error::Status { url, status } => {
                assert_eq!(status, 503);
                assert!(url.ends_with("/v0/item/7.json"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_http_fetcher_connection_refused() {
        // Nothing listens on port 1
        let config = HnConfig::default().with_base_url("http://127.0.0.1:1/v0");
        let fetcher = HttpFetcher::from_config(&config).unwrap();

        let err = fetch_max_item(&fetcher).await.unwrap_err();

        assert!(matches!(err, Error::Network(_)));
    }

    #[tokio::test]
    async fn test_fetch_item_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v0/item/8863.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 8863,
                "by": "dhouston",
                "type": "story",
                "score": 111,
                "title": "My YC app: Dropbox - Throw away your USB drive"
            })))
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server).await;
        let item = fetch_item(&fetcher, 8863).await.unwrap();

        assert_eq!(item.id, 8863);
        assert_eq!(item.item_type, ItemType::Story);
        assert_eq!(item.score, 111);
        assert!(item.url.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_ids_malformed_body() {
        let fetcher = MockFetcher::new().with_body("newstories", r#"{"not": "an array"}"#);

        let err = fetch_ids(&fetcher, Category::New).await.unwrap_err();

        assert!(matches!(err, Error::Decode { ref path, .. } if path == "newstories"));
    }

    #[tokio::test]
    async fn test_fetch_item_null_body_is_decode_error() {
        let fetcher = MockFetcher::new().with_body("item/99", "null");

        let err = fetch_item(&fetcher, 99).await.unwrap_err();

        assert!(matches!(err, Error::Decode { ref path, .. } if path == "item/99"));
    }

    #[tokio::test]
    async fn test_fetch_user() {
        let fetcher = MockFetcher::new().with_body(
            "user/jl",
            r#"{"id": "jl", "karma": 2937, "created": 1173923446, "submitted": [1, 2]}"#,
        );

        let user = fetch_user(&fetcher, "jl").await.unwrap();

        assert_eq!(user.id, "jl");
        assert_eq!(user.karma, 2937);
        assert_eq!(user.submitted, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_fetch_max_item_and_updates() {
        let fetcher = MockFetcher::new()
            .with_body("maxitem", "9130260")
            .with_body("updates", r#"{"items": [5, 6], "profiles": ["pg"]}"#);

        assert_eq!(fetch_max_item(&fetcher).await.unwrap(), 9130260);

        let updates = fetch_updates(&fetcher).await.unwrap();
        assert_eq!(updates.items, vec![5, 6]);
        assert_eq!(updates.profiles, vec!["pg"]);
    }
}
