//! Samsung Galaxy Store client
//!
//! The Imperative Shell around [`galaxystore_core`]: it owns the HTTP session
//! and configuration, and hands raw payloads to the core parsers.
//!
//! ```rust,no_run
//! use galaxystore::client::GalaxyStore;
//! use galaxystore::models::MinimalJson;
//! use galaxystore::protocol::CategoryScope;
//!
//! # fn main() -> galaxystore::Result<()> {
//! let store = GalaxyStore::new()?;
//! for category in store.categories(CategoryScope::Games)? {
//!     println!("{:?}", category.to_minimal_json()?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use error::{Error, Result};
pub use galaxystore_core::{models, protocol};
