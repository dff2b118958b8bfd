//! Core types for Apsu.
//!
//! This crate provides:
//! - [`EntityId`] - Opaque entity identifiers
//! - [`Error`] - The error type for storage operations

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod error;

pub use entity::EntityId;
pub use error::{Error, Result};
