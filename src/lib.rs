//! Apsu - Entity-component storage core
//!
//! This crate re-exports both layers of the Apsu system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: apsu_storage    — Entity allocation, component maps, nicknames
//! Layer 0: apsu_foundation — Core types (EntityId, Error)
//! ```

pub use apsu_foundation as foundation;
pub use apsu_storage as storage;
