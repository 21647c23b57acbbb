//! Shared types used across all modules.
//!
//! This module defines the commit input and chat message structures.
//! Other modules import from here rather than reaching into each
//! other's internals.

pub mod commit;
pub mod message;

pub use commit::CommitContext;
pub use message::{ChatMessage, Role};
