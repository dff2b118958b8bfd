//! Error types for Apsu storage operations.
//!
//! Uses `thiserror` for ergonomic error definition. The taxonomy is
//! deliberately small: duplicate nickname assignment is the only
//! recoverable failure in the storage core. Absence (missing component,
//! missing nickname, unknown entity) is represented with `Option`, never
//! with an error.

use thiserror::Error;

use crate::entity::EntityId;

/// The error type for Apsu storage operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A nickname assignment would bind a name that already names a
    /// different entity.
    #[error("duplicate nickname: {nickname:?} is already bound to {existing}")]
    DuplicateNickname {
        /// The requested nickname.
        nickname: String,
        /// The entity that already holds the nickname.
        existing: EntityId,
    },
}

impl Error {
    /// Creates a duplicate nickname error.
    #[must_use]
    pub fn duplicate_nickname(nickname: impl Into<String>, existing: EntityId) -> Self {
        Self::DuplicateNickname {
            nickname: nickname.into(),
            existing,
        }
    }
}

/// Result alias for Apsu storage operations.
pub type Result<T> = std::result::Result<T, Error>;
