//! Host helpers - Imperative Shell.
//!
//! Everything here talks to a host environment (address bar, history,
//! document, image loader, user agent) through an injected capability
//! trait. The string and data helpers it builds on live in
//! `nice_utils_core`.
//!
//! # Architecture
//!
//! - **Functional Core** (`nice_utils_core`): path resolution, predicates, text, URLs
//! - **Imperative Shell** (this crate): location, history, DOM polling, image loading
//!
//! # Example
//!
//! ```
//! use nice_utils_host::{change_url_hash, Location, StaticLocation, StaticViewport, Urls};
//!
//! let location = StaticLocation::new("https://example.com/docs?lang=en").unwrap();
//! assert_eq!(Urls::current(&location).param("lang").as_deref(), Some("en"));
//!
//! change_url_hash(&location, &StaticViewport::default(), Some("tab=api")).unwrap();
//! assert_eq!(location.href(), "https://example.com/docs?lang=en#tab=api");
//! assert_eq!(Urls::current(&location).hash_param("tab").as_deref(), Some("api"));
//! ```

pub mod dom;
pub mod environment;
mod error;
pub mod image;
pub mod location;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use dom::{is_element_loaded, net_element_width, Document, ElementMetrics, ElementWaitConfig};
pub use environment::{is_ios, is_touch_device, HostEnvironment, StaticEnvironment};
pub use error::{HostError, Result};
pub use image::{is_image_loaded, FsImageLoader, ImageLoad, ImageLoader, ImageStatus};
pub use location::{
    change_url_hash, Location, ScrollPosition, StaticLocation, StaticViewport, Urls, Viewport,
};
