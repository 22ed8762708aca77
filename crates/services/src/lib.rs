//! # Services
//!
//! One use-case orchestrator per business operation. Each struct holds only
//! its injected repository ports, so concurrent invocations share no mutable
//! state; the ports are the only suspension points. Every use case performs
//! at most one mutating port call, after all validation gates have passed,
//! and propagates `DomainError` unchanged.

pub mod comments;
pub mod replies;
pub mod threads;

pub use comments::{AddCommentUseCase, DeleteCommentUseCase};
pub use replies::{AddReplyUseCase, DeleteReplyUseCase};
pub use threads::{AddThreadUseCase, GetThreadDetailsUseCase};
