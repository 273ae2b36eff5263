//! Runtime companion for consumers of a packaged gricons set
//!
//! Rendering layers embedding gricons resolve which URL an icon input
//! points at, then load its markup through a store that fetches each
//! URL exactly once and shares the result:
//!
//! ```
//! use gricons_client::{ContentStore, IconHandle};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let handle = IconHandle::named("airplane-outline");
//! assert_eq!(handle.aria_label().as_deref(), Some("airplane outline"));
//!
//! let url = handle.resolve_url("https://cdn.example.com/gricons").unwrap();
//! assert_eq!(url, "https://cdn.example.com/gricons/svg/airplane-outline.svg");
//!
//! // A detached store never fetches; lookups resolve to no content.
//! let store = ContentStore::detached();
//! assert_eq!(store.get(&url).await, "");
//! # }
//! ```
//!
//! Fetch failures are deliberately invisible: the store caches empty
//! content for them and the icon simply renders blank, matching how a
//! missing image degrades.

pub mod error;
pub mod fetch;
pub mod resolve;
pub mod store;

pub use error::{ClientError, Result};
pub use fetch::{HttpFetcher, SvgFetcher};
pub use resolve::IconHandle;
pub use store::ContentStore;
