//! Shared fixture wiring the use cases over the in-memory storage adapter,
//! the way a transport shell would wire them over a real database.

use std::sync::Arc;

use services::{
    AddCommentUseCase, AddReplyUseCase, AddThreadUseCase, DeleteCommentUseCase,
    DeleteReplyUseCase, GetThreadDetailsUseCase,
};
use storage_adapters::{
    MemoryCommentRepository, MemoryReplyRepository, MemoryStore, MemoryThreadRepository,
};

pub struct Forum {
    pub store: Arc<MemoryStore>,
    pub add_thread: AddThreadUseCase,
    pub add_comment: AddCommentUseCase,
    pub add_reply: AddReplyUseCase,
    pub delete_comment: DeleteCommentUseCase,
    pub delete_reply: DeleteReplyUseCase,
    pub get_thread_details: GetThreadDetailsUseCase,
}

impl Forum {
    pub fn new() -> Self {
        // Several tests share a process; only the first init wins.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let store = MemoryStore::new();
        let threads = Arc::new(MemoryThreadRepository::new(store.clone()));
        let comments = Arc::new(MemoryCommentRepository::new(store.clone()));
        let replies = Arc::new(MemoryReplyRepository::new(store.clone()));

        Self {
            store,
            add_thread: AddThreadUseCase::new(threads.clone()),
            add_comment: AddCommentUseCase::new(comments.clone(), threads.clone()),
            add_reply: AddReplyUseCase::new(replies.clone(), comments.clone(), threads.clone()),
            delete_comment: DeleteCommentUseCase::new(comments.clone(), threads.clone()),
            delete_reply: DeleteReplyUseCase::new(replies, comments.clone(), threads.clone()),
            get_thread_details: GetThreadDetailsUseCase::new(threads, comments),
        }
    }
}

impl Default for Forum {
    fn default() -> Self {
        Self::new()
    }
}
