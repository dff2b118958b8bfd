//! Entity allocation, component storage, and nicknames for Apsu.
//!
//! This crate provides:
//! - [`EntityAllocator`] - Monotonic entity ID allocation
//! - [`ComponentStore`] - Per-type component maps with type-erased storage
//! - [`NicknameIndex`] - Bidirectional entity/nickname index
//! - [`EntityManager`] - The unified facade over all three

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod component;
pub mod entity;
pub mod manager;
pub mod nickname;

pub use component::{Component, ComponentStore};
pub use entity::EntityAllocator;
pub use manager::EntityManager;
pub use nickname::NicknameIndex;
