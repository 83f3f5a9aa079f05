//! In-memory dataset stores
//!
//! Each store is loaded once from a [`DatasetSource`](crate::ports::dataset_source::DatasetSource)
//! and is read-only afterwards. Lookups never fail: a miss is `None`,
//! and a store that was never loaded behaves as an empty one.

pub mod card_store;
pub mod country_store;
pub mod dataset;
