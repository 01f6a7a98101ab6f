//! In-memory [`Fetch`] for unit tests
//!
//! Routes map an API path to a canned body or error, optionally delayed, so
//! tests can control completion order and failure points without a network.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use hnpage_core::hn::{item_path, Category};

use super::Fetch;
use crate::prelude::*;

#[derive(Debug, Clone)]
struct Route {
    delay: Duration,
    response: Result<Vec<u8>>,
}

#[derive(Debug, Clone, Default)]
pub struct MockFetcher {
    routes: HashMap<String, Route>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(self, path: &str, body: &str) -> Self {
        self.with_route(path, Duration::ZERO, Ok(body.as_bytes().to_vec()))
    }

    pub fn with_ids(self, category: Category, ids: &[u64]) -> Self {
        let body = serde_json::to_string(ids).unwrap();
        self.with_body(category.path(), &body)
    }

    /// A story whose title encodes its id
    pub fn with_item(self, id: u64) -> Self {
        self.with_item_delay(id, Duration::ZERO)
    }

    pub fn with_items(self, ids: impl IntoIterator<Item = u64>) -> Self {
        ids.into_iter().fold(self, |mock, id| mock.with_item(id))
    }

    pub fn with_item_delay(self, id: u64, delay: Duration) -> Self {
        let body = serde_json::json!({
            "id": id,
            "type": "story",
            "by": "tester",
            "title": story_title(id),
            "time": 1609459200,
        });
        self.with_route(&item_path(id), delay, Ok(body.to_string().into_bytes()))
    }

    pub fn with_failure(self, path: &str, delay: Duration, error: Error) -> Self {
        self.with_route(path, delay, Err(error))
    }

    fn with_route(mut self, path: &str, delay: Duration, response: Result<Vec<u8>>) -> Self {
        self.routes
            .insert(path.to_string(), Route { delay, response });
        self
    }

    /// Every path requested so far, in request order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

pub fn story_title(id: u64) -> String {
    f!("Story {id}")
}

impl Fetch for MockFetcher {
    async fn get(&self, path: &str) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(path.to_string());

        let Some(route) = self.routes.get(path).cloned() else {
            return Err(Error::Status {
                url: path.to_string(),
                status: 404,
            });
        };

        if !route.delay.is_zero() {
            tokio::time::sleep(route.delay).await;
        }

        route.response
    }
}
