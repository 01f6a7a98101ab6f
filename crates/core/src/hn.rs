use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default root of the HackerNews Firebase API.
pub const HN_API_BASE: &str = "https://hacker-news.firebaseio.com/v0";

/// Suffix every HackerNews API resource carries.
pub const API_SUFFIX: &str = ".json";

pub const MAX_ITEM_PATH: &str = "maxitem";
pub const UPDATES_PATH: &str = "updates";

/// Story list selector. Each variant maps to exactly one upstream resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    New,
    Best,
    Ask,
    Show,
    Job,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Top,
        Category::New,
        Category::Best,
        Category::Ask,
        Category::Show,
        Category::Job,
    ];

    /// Upstream resource path holding the ranked id list for this category
    pub fn path(self) -> &'static str {
        match self {
            Category::Top => "topstories",
            Category::New => "newstories",
            Category::Best => "beststories",
            Category::Ask => "askstories",
            Category::Show => "showstories",
            Category::Job => "jobstories",
        }
    }

    /// Short name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::New => "new",
            Category::Best => "best",
            Category::Ask => "ask",
            Category::Show => "show",
            Category::Job => "job",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid story type: {0}. Valid types: top, new, best, ask, show, job")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Accepts the short name (`top`) or the upstream path (`topstories`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.name() == needle || c.path() == needle)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Kind of object an [`Item`] represents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Job,
    Story,
    Comment,
    Poll,
    #[serde(rename = "pollopt")]
    PollOpt,
    #[default]
    #[serde(other)]
    Unknown,
}

/// HackerNews item from API.
///
/// Every field falls back to its zero value when the upstream object omits it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: u64,
    pub deleted: bool,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub by: String,
    pub time: i64,
    pub text: String,
    pub dead: bool,
    pub parent: u64,
    pub poll: u64,
    pub kids: Vec<u64>,
    pub url: String,
    pub score: i64,
    pub title: String,
    pub parts: Vec<u64>,
    pub descendants: u64,
}

impl Item {
    /// Creation time, or `None` when the item carries no usable timestamp
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.time)
    }

    pub fn is_live(&self) -> bool {
        !self.deleted && !self.dead
    }
}

/// HackerNews user profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub delay: i64,
    pub created: i64,
    pub karma: i64,
    pub about: String,
    pub submitted: Vec<u64>,
}

impl User {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        unix_time(self.created)
    }
}

/// Recently changed items and profiles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Updates {
    pub items: Vec<u64>,
    pub profiles: Vec<String>,
}

fn unix_time(seconds: i64) -> Option<DateTime<Utc>> {
    if seconds == 0 {
        return None;
    }
    DateTime::<Utc>::from_timestamp(seconds, 0)
}

pub fn item_path(id: u64) -> String {
    format!("item/{id}")
}

pub fn user_path(id: &str) -> String {
    format!("user/{id}")
}

/// Join an API root and a resource path into the full `.json` URL
pub fn api_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/'),
        API_SUFFIX
    )
}
