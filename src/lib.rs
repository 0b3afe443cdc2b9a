#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// A hash map built from a neighborhood table and an overflow list.
///
/// This module provides the `HashMap` façade that composes the two backing
/// stores, enforces key uniqueness across them, and drives resizing.
pub mod hash_map;

/// The bounded-neighborhood open-addressed table.
///
/// This module provides the `HashTable` implementing hopscotch displacement,
/// along with the neighborhood width, capacity floor, and load-factor
/// constants the map is tuned by.
pub mod hash_table;

/// The overflow fallback store.
///
/// This module provides the `OverflowList` holding entries the table could
/// not place under saturated neighborhoods.
pub mod overflow;

/// The common surface of the two backing stores.
pub mod store;

/// Default hasher builder used by [`HashMap`] when no explicit hasher is
/// supplied.
#[cfg(feature = "foldhash")]
pub type DefaultHashBuilder = foldhash::fast::RandomState;

/// Placeholder for the default hasher builder.
///
/// With the `foldhash` feature disabled there is no default hasher; this type
/// is uninhabited and maps must be built with [`HashMap::with_hasher`].
#[cfg(not(feature = "foldhash"))]
pub enum DefaultHashBuilder {}

pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_map::NotFoundError;
pub use hash_table::HashTable;
pub use overflow::OverflowList;
pub use store::Store;
