//! Array-backed circular deque for Sepet.
//!
//! ## Features
//!
//! - `CircularDeque`: growable ring buffer with O(1) push/pop at both ends.
//! - O(1) random access by logical index, with a forgiving clamping policy.
//! - Mid-deque insertion and removal that shifts the shorter side, bounding
//!   the cost by the distance to the nearer end.
//! - Bulk operations (`insert_many`, `remove_range`, `truncate`,
//!   `truncate_front`) built on a shared gap-management primitive.
//!
//! ## Usage
//!
//! ```rust
//! use sepet_deque::CircularDeque;
//!
//! let mut dq = CircularDeque::new();
//! dq.push_back('b');
//! dq.push_back('c');
//! dq.push_front('a');
//!
//! assert_eq!(dq.pop_front(), Some('a'));
//! assert_eq!(dq.get(0), Some(&'b'));
//! ```

pub mod deque;

pub use deque::{CircularDeque, IntoIter, Iter, IterMut};
