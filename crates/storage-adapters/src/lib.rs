//! # Storage Adapters
//!
//! Implementations of the repository ports. Currently ships the in-memory
//! backend used by tests and demos; a SQL backend plugs in behind the same
//! traits.

pub mod memory;

pub use memory::{
    MemoryCommentRepository, MemoryReplyRepository, MemoryStore, MemoryThreadRepository,
};
