//! Junction: a small boolean expression matcher.
//!
//! A junction is a parsed expression over named terms, such as
//! `"cache & (disk | !network)"`, that can be matched repeatedly against
//! sets of present terms. Parsing tokenizes the input, runs a
//! shunting-yard pass into reverse Polish notation, and stores the result;
//! matching evaluates the RPN program with a boolean stack. All
//! intermediate storage uses the sepet containers.
//!
//! # Example
//!
//! ```rust
//! use sepet_junction::Junction;
//! use sepet_map::HashSet;
//!
//! let junction = Junction::parse("a & (b | !c)").unwrap();
//!
//! let mut present = HashSet::new();
//! present.insert("a".to_string());
//! present.insert("b".to_string());
//! assert!(junction.matches(&present));
//! ```

pub mod error;
pub mod junction;

pub use error::JunctionError;
pub use junction::Junction;
