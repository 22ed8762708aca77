//! Soft-delete behavior end to end: ownership enforcement, redaction in the
//! detail view, and idempotent repeat deletes.

use anyhow::Result;
use serde_json::json;

use api_adapters::ClientError;
use domains::entities::comment::DELETED_COMMENT_PLACEHOLDER;
use domains::entities::reply::DELETED_REPLY_PLACEHOLDER;
use integration_tests::Forum;

struct Conversation {
    thread_id: String,
    comment_id: String,
    reply_id: String,
}

async fn seed_conversation(forum: &Forum) -> Result<Conversation> {
    forum.store.register_user("user-123", "johndoe");
    forum.store.register_user("user-456", "janedoe");

    let thread = forum
        .add_thread
        .execute("user-123", &json!({ "title": "a thread", "body": "its body" }))
        .await?;
    let comment = forum
        .add_comment
        .execute(
            "user-123",
            &json!({ "content": "a comment", "threadId": &thread.id }),
        )
        .await?;
    let reply = forum
        .add_reply
        .execute(
            "user-456",
            &json!({
                "content": "a reply",
                "threadId": &thread.id,
                "commentId": &comment.id,
            }),
        )
        .await?;

    Ok(Conversation {
        thread_id: thread.id,
        comment_id: comment.id,
        reply_id: reply.id,
    })
}

#[tokio::test]
async fn only_the_owner_may_delete() -> Result<()> {
    let forum = Forum::new();
    let conv = seed_conversation(&forum).await?;

    let err = forum
        .delete_comment
        .execute(
            "user-456",
            &json!({ "threadId": &conv.thread_id, "commentId": &conv.comment_id }),
        )
        .await
        .unwrap_err();

    let client_err: ClientError = err.into();
    assert_eq!(client_err.status_code(), 403);
    assert_eq!(client_err.to_string(), "Gagal menghapus komentar, akses ditolak!");

    // The rejected delete left the content untouched.
    let view = forum
        .get_thread_details
        .execute(&json!({ "threadId": &conv.thread_id }))
        .await?;
    assert_eq!(view.comments[0].content, "a comment");

    Ok(())
}

#[tokio::test]
async fn deleted_content_is_redacted_but_keeps_its_place() -> Result<()> {
    let forum = Forum::new();
    let conv = seed_conversation(&forum).await?;

    forum
        .delete_reply
        .execute(
            "user-456",
            &json!({
                "threadId": &conv.thread_id,
                "commentId": &conv.comment_id,
                "replyId": &conv.reply_id,
            }),
        )
        .await?;
    forum
        .delete_comment
        .execute(
            "user-123",
            &json!({ "threadId": &conv.thread_id, "commentId": &conv.comment_id }),
        )
        .await?;

    let view = forum
        .get_thread_details
        .execute(&json!({ "threadId": &conv.thread_id }))
        .await?;

    // Rows survive with their ids and order; only the content is replaced.
    assert_eq!(view.comments.len(), 1);
    assert_eq!(view.comments[0].id, conv.comment_id);
    assert_eq!(view.comments[0].content, DELETED_COMMENT_PLACEHOLDER);
    assert_eq!(view.comments[0].replies.len(), 1);
    assert_eq!(view.comments[0].replies[0].id, conv.reply_id);
    assert_eq!(view.comments[0].replies[0].content, DELETED_REPLY_PLACEHOLDER);

    Ok(())
}

#[tokio::test]
async fn repeating_a_delete_is_harmless() -> Result<()> {
    let forum = Forum::new();
    let conv = seed_conversation(&forum).await?;

    let payload = json!({ "threadId": &conv.thread_id, "commentId": &conv.comment_id });
    forum.delete_comment.execute("user-123", &payload).await?;
    forum.delete_comment.execute("user-123", &payload).await?;

    let view = forum
        .get_thread_details
        .execute(&json!({ "threadId": &conv.thread_id }))
        .await?;
    assert_eq!(view.comments[0].content, DELETED_COMMENT_PLACEHOLDER);

    Ok(())
}

#[tokio::test]
async fn deleting_a_reply_checks_the_whole_chain() {
    let forum = Forum::new();

    // Missing thread is reported first, before any comment lookup.
    let err = forum
        .delete_reply
        .execute(
            "user-123",
            &json!({
                "threadId": "thread-404",
                "commentId": "comment-404",
                "replyId": "reply-404",
            }),
        )
        .await
        .unwrap_err();

    let client_err: ClientError = err.into();
    assert_eq!(client_err.status_code(), 404);
    assert_eq!(
        client_err.to_string(),
        "Thread dengan id 'thread-404' tidak ditemukan!"
    );
}
