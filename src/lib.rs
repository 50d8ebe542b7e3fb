//! Fixed-capacity hash sets with open addressing, linear probing, and
//! tombstone-based deletion. Capacity is chosen at creation and never
//! grows; hashing and equality are pluggable per set.

pub mod error;
pub mod ops;
pub mod strings;
pub mod table;

pub use error::Error;
pub use ops::{DefaultOps, FnOps, SetOps};
pub use strings::{StrOps, StringSet, strhash};
pub use table::FixedSet;
