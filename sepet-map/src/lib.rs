//! Open-addressing hash containers for Sepet.
//!
//! # Features
//!
//! - **No tombstones**: removal repairs the probe chain in place with a
//!   backward shift, so probe lengths never degrade over time.
//! - **Linear probing** over a power-of-two table, masked indices, growth
//!   at a 0.75 load factor.
//! - **Flexible hashing**: every container is generic over a
//!   [`BuildHasher`](core::hash::BuildHasher), defaulting to
//!   `foldhash::fast::FixedState`.
//! - **Ordered variants**: [`OrderedMap`] and [`OrderedSet`] layer a dense
//!   insertion-order array over the hash containers.
//!
//! # Example
//!
//! ```rust
//! use sepet_map::HashMap;
//!
//! let mut map = HashMap::new();
//! map.insert(42, "hello");
//! map.insert(100, "world");
//!
//! if let Some(value) = map.get(&42) {
//!     println!("Found: {}", value);
//! }
//!
//! map.remove(&42);
//! assert!(!map.contains_key(&42));
//! ```

pub mod map;
pub mod ordered;
pub mod raw;
pub mod set;

pub use map::HashMap;
pub use ordered::{OrderedMap, OrderedSet};
pub use set::HashSet;

/// The default hasher state, re-exported for type signatures.
pub use foldhash::fast::FixedState;
