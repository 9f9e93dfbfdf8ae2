use std::io;

use thiserror::Error;

use crate::application::LibraryError;

/// メニュー操作1回分のエラー
///
/// `Io`と`EndOfInput`以外は利用者に表示し、メニューに戻る。
#[derive(Debug, Error)]
pub enum CommandError {
    /// 図書館が操作を拒否した
    #[error(transparent)]
    Library(#[from] LibraryError),

    /// 数値が必要な項目に数値以外が入力された
    #[error("Invalid input for {field}: '{input}' is not a valid number")]
    MalformedInput { field: &'static str, input: String },

    /// 操作の途中で標準入力が閉じた
    #[error("Input ended")]
    EndOfInput,

    /// 端末の入出力エラー
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl CommandError {
    /// エラーをログに記録し、利用者に表示する1行を返す
    pub fn report(&self) -> String {
        match self {
            // 存在しない
            CommandError::Library(
                e @ (LibraryError::BookNotFound(_) | LibraryError::MemberNotFound(_)),
            ) => {
                tracing::warn!(error = %e, "lookup failed");
            }
            // 不正な状態
            CommandError::Library(
                e @ (LibraryError::NoCopiesAvailable { .. }
                | LibraryError::MemberHasActiveLoans { .. }
                | LibraryError::NoActiveLoan { .. }),
            ) => {
                tracing::warn!(error = %e, "operation rejected");
            }
            // 台帳と目録の不整合、採番切れ
            CommandError::Library(
                e @ (LibraryError::IdsExhausted(_)
                | LibraryError::InvalidLoanState(_)
                | LibraryError::DomainError(_)),
            ) => {
                tracing::error!(error = %e, "library error");
            }
            CommandError::MalformedInput { field, input } => {
                tracing::debug!(field, input = %input, "malformed input");
            }
            CommandError::EndOfInput | CommandError::Io(_) => {
                tracing::error!(error = %self, "terminal error");
            }
        }
        self.to_string()
    }
}
