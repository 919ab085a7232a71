//! Core library for galaxystore
//!
//! This crate implements the **Functional Core** of the galaxystore client,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The galaxystore project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`galaxystore_core`** (this crate): Envelope building, payload parsing and
//!   model normalization with zero I/O
//! - **`galaxystore`**: The HTTP session, configuration and CLI (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: A payload string always maps to the same models
//! - **No side effects**: No network access; the review pager receives its
//!   page fetcher from the caller
//! - **Testable**: Everything here is tested with fixture payloads, no mocking required
//!
//! # Module Organization
//!
//! - [`utils`]: Field normalization (flags, prices, dates, minimal maps)
//! - [`models`]: `Category`, `Developer`, `Review`, `AppSummary`, `App`
//! - [`protocol`]: XML request envelopes and XML response parsing
//! - [`detail`]: App detail JSON parsing
//! - [`reviews`]: Review JSON parsing and the lazy review pager
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use galaxystore_core::models::MinimalJson;
//! use galaxystore_core::protocol::parse_categories;
//!
//! let categories = parse_categories(&xml)?;
//! for category in categories {
//!     println!("{}", serde_json::Value::Object(category?.to_minimal_json()?));
//! }
//! ```

pub mod detail;
pub mod error;
pub mod models;
pub mod protocol;
pub mod reviews;
pub mod utils;

pub use error::{Error, Result};
