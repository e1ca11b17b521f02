//! The module contains the errors the engine can return.
//!
//! Validation errors ([`InvalidName`], [`InvalidAmount`], [`InvalidSplit`],
//! [`UnknownMember`]) reject an operation before any state changes.
//! [`KeyNotFound`] is returned by lookups and updates on a missing group.
//!
//! [`InvalidName`]: EngineError::InvalidName
//! [`InvalidAmount`]: EngineError::InvalidAmount
//! [`InvalidSplit`]: EngineError::InvalidSplit
//! [`UnknownMember`]: EngineError::UnknownMember
//! [`KeyNotFound`]: EngineError::KeyNotFound
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid split: {0}")]
    InvalidSplit(String),
    #[error("\"{0}\" is not a member of the group")]
    UnknownMember(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Not implemented: {0}")]
    Unimplemented(String),
}
