#![deny(rust_2018_idioms, clippy::all, unsafe_code)]
#![warn(clippy::nursery)]

//! Access collections with null safety.
//!
//! Every `safe_*` function takes an optional reference to a container
//! and returns a reference that is always present:
//! the input itself if there was one,
//! otherwise a shared, immutable empty container of the same type.
//!
//! This is mostly useful in iterator pipelines over data with optional parts.
//! The registry behind it accepts any `Default + Send + Sync + 'static` type,
//! see [`CanonicalEmpty`].
//!
//! ```rust
//! use safe_collections::{safe_list, OrEmpty};
//! use std::collections::HashMap;
//!
//! let tags: Option<Vec<String>> = None;
//! assert!(safe_list(tags.as_ref()).is_empty());
//!
//! let scores: Option<HashMap<String, u32>> = None;
//! assert_eq!(scores.as_ref().or_empty().values().sum::<u32>(), 0);
//! ```

mod ext;
mod registry;
mod safe;

pub use ext::OrEmpty;
pub use registry::{canonical_empty, CanonicalEmpty};
pub use safe::*;
