//! # Keyslot
//!
//! Fixed-capacity hash maps implemented over two collision-resolution
//! strategies:
//!
//! - [`ProbeMap`]: open addressing with linear probing over a flat slot
//!   array. Collisions scan forward, wrapping at the table end.
//! - [`ChainMap`]: separate chaining with a list of entries per slot.
//!   Collisions append to the slot's bucket.
//!
//! Both variants address their storage through the pluggable [`SlotHash`]
//! strategy trait and track live entries independently of capacity. The
//! capacity chosen at construction never changes behind the caller's back:
//! there is no load-factor trigger and no automatic rehash. `ProbeMap`
//! exposes [`next_prime`](ProbeMap::next_prime) and
//! [`resize`](ProbeMap::resize) for callers who want to rebuild by hand.
//!
//! Neither map checks for an existing key on insert. Re-inserting a key
//! stores a second physical entry; both entries are live, counted, and
//! visited by iteration. Which one a lookup resolves to differs per
//! variant, see the type docs. Size tables generously.
//!
//! ## Basic Usage
//!
//! ```rust
//! use keyslot::ProbeMap;
//!
//! let mut map = ProbeMap::with_capacity(19);
//!
//! map.insert(24, 17);
//! map.insert(34, 12);
//! assert_eq!(map.get(&24), Some(&17));
//!
//! assert_eq!(map.remove(&24), Some(17));
//! assert_eq!(map.get(&24), None);
//! // Removing an absent key is not an error here
//! assert_eq!(map.remove(&24), None);
//! ```
//!
//! ## Chained Buckets
//!
//! ```rust
//! use keyslot::{ChainMap, RemoveError};
//!
//! let mut map = ChainMap::new();
//!
//! map.insert("apple".to_string(), 1);
//! map.insert("banana".to_string(), 2);
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // The chained variant reports erase-of-nothing as an error
//! assert_eq!(map.remove("cherry"), Err(RemoveError::KeyNotFound));
//! assert_eq!(map.remove("banana"), Ok(2));
//! ```
//!
//! ## Iteration
//!
//! Both maps iterate over live entries only, forward and backward:
//!
//! ```rust
//! use keyslot::ChainMap;
//!
//! let mut map = ChainMap::with_capacity(7);
//! map.extend([(1, "a"), (2, "b"), (3, "c")]);
//!
//! assert_eq!(map.iter().count(), 3);
//! let last = map.iter().next_back();
//! assert!(last.is_some());
//! ```

/// Module implementing the separate-chaining map
mod chain_map;
/// Module implementing the linear-probing map
mod probe_map;
/// Pluggable slot-addressing strategies
mod slot_hash;
/// Utility helpers shared by both maps
mod utils;

pub use chain_map::{ChainMap, Cursor, RemoveError};
pub use probe_map::ProbeMap;
pub use slot_hash::{ChainHash, ProbeHash, SlotHash};
pub use utils::MapExtensions;
