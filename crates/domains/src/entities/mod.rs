//! Validated value objects. Each constructor checks payload shape at
//! construction time and returns a typed `DomainError` on the first failed
//! gate; presence checks always run before type checks.

pub mod comment;
pub mod reply;
pub mod thread;

pub use comment::{CommentDetails, CreateComment, CreatedComment, DeleteComment};
pub use reply::{CreateReply, CreatedReply, DeleteReply, ReplyDetails};
pub use thread::{CreateThread, CreatedThread, ThreadDetailsView};
