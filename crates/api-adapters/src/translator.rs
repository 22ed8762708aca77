//! Maps symbolic domain-error codes to the localized (Indonesian) sentences
//! shown to users. Codes without a translation fall back to the error's own
//! rendering, so new entities degrade gracefully instead of panicking.

use domains::error::{AuthorizationError, DomainError, NotFoundError};

fn validation_message(code: &str) -> Option<&'static str> {
    Some(match code {
        "CREATE_THREAD.NOT_CONTAIN_NEEDED_PROPERTY" => "title dan body harus diisi",
        "CREATE_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION" => "title dan body harus string",
        "CREATE_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY" => "content dan threadId harus diisi",
        "CREATE_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION" => "content dan threadId harus string",
        "CREATE_REPLY.NOT_CONTAIN_NEEDED_PROPERTY" => {
            "content, threadId, dan commentId harus diisi"
        }
        "CREATE_REPLY.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "content, threadId, dan commentId harus string"
        }
        _ => return None,
    })
}

/// Renders a `DomainError` as the sentence the transport shell should show.
pub fn translate(error: &DomainError) -> String {
    match error {
        DomainError::Validation(err) => validation_message(&err.code())
            .map(str::to_owned)
            .unwrap_or_else(|| err.to_string()),
        DomainError::NotFound(err) => match err {
            NotFoundError::Thread { thread_id } => {
                format!("Thread dengan id '{thread_id}' tidak ditemukan!")
            }
            NotFoundError::Comment {
                comment_id,
                thread_id,
            } => format!(
                "Komentar dengan id '{comment_id}' pada id thread '{thread_id}' tidak ditemukan!"
            ),
            NotFoundError::Reply {
                reply_id,
                comment_id,
            } => format!(
                "Balasan dengan id '{reply_id}' pada id komentar '{comment_id}' tidak ditemukan!"
            ),
        },
        DomainError::Authorization(err) => match err {
            AuthorizationError::DeleteComment => "Gagal menghapus komentar, akses ditolak!".into(),
            AuthorizationError::DeleteReply => "Gagal menghapus balasan, akses ditolak!".into(),
        },
        DomainError::Internal(_) => "terjadi kegagalan pada server kami".into(),
    }
}
