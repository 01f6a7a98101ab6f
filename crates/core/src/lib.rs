//! Core library for hnpage
//!
//! This crate implements the **Functional Core** of the hnpage project,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`hnpage_core`** (this crate): Pure domain types and page arithmetic with zero I/O
//! - **`hnpage`**: Network fetches, concurrent hydration and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`hn`]: HackerNews API data model (categories, items, users, updates) and path scheme
//! - [`pagination`]: Page window arithmetic and the page envelope returned to callers
//!
//! # Example Usage
//!
//! ```rust
//! use hnpage_core::pagination::{page_window, Page};
//!
//! // 25 ids, 10 per page: page 3 holds ids [20, 25)
//! let window = page_window(25, 10, 3).unwrap();
//! assert_eq!(window, Some(20..25));
//!
//! // Page 4 lies beyond the data and is not an error
//! assert_eq!(page_window(25, 10, 4).unwrap(), None);
//!
//! let page: Page<u64> = Page::empty(10, 4, 25);
//! assert!(!page.has_next_page());
//! ```

pub mod hn;
pub mod pagination;
