//! Sepet: in-memory collections for single-threaded workloads.
//!
//! Sepet bundles three member crates under one roof:
//!
//! - [`sepet_deque`]: a growable circular deque with O(1) push/pop at both
//!   ends, clamping positional access, and in-place gap management for bulk
//!   insertion and removal.
//! - [`sepet_map`]: open-addressing hash maps and sets with backward-shift
//!   deletion (no tombstones), plus insertion-ordered variants.
//! - [`sepet_junction`]: a small boolean expression matcher built on the
//!   other two.
//!
//! None of the containers synchronize: callers needing thread safety wrap
//! whole operations in their own locking.
//!
//! # Example
//!
//! ```rust
//! use sepet::{CircularDeque, HashMap};
//!
//! let mut dq = CircularDeque::new();
//! dq.push_back(1);
//! dq.push_front(0);
//! assert_eq!(dq.get(0), Some(&0));
//!
//! let mut map = HashMap::new();
//! map.insert("answer", 42);
//! assert_eq!(map.get("answer"), Some(&42));
//! ```

pub use sepet_deque::CircularDeque;
pub use sepet_junction::{Junction, JunctionError};
pub use sepet_map::{HashMap, HashSet, OrderedMap, OrderedSet};

// Re-export the member crates whole for callers who need iterator or error
// types not surfaced above.
pub use sepet_deque;
pub use sepet_junction;
pub use sepet_map;
