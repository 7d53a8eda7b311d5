//! Type-safe key-value persistence for the storecart widget.
//!
//! Provides a small, ergonomic API for keeping serializable values in a
//! key-value slot, with automatic JSON serialization. The backend is
//! pluggable:
//!
//! - [`MemoryStore`] - in-process map, for tests
//! - [`FileStore`] - a JSON file on disk (native targets only)
//! - [`LocalStorage`] - the browser's `window.localStorage` (wasm32 only)
//!
//! # Example
//!
//! ```rust
//! use storecart_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! cache.set("cart", &vec!["tea", "samosa"]).unwrap();
//! let cart: Option<Vec<String>> = cache.get("cart").unwrap();
//! assert_eq!(cart.unwrap().len(), 2);
//!
//! cache.delete("cart").unwrap();
//! assert!(!cache.exists("cart").unwrap());
//! ```

mod error;
mod kv;
mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local;

pub use error::CacheError;
pub use kv::{Cache, KvStore};
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, KvStore, MemoryStore};
}
