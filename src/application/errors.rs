use thiserror::Error;

use crate::domain::{BookId, MemberId};

/// 図書館アプリケーション層のエラー
///
/// どのエラーも状態を変更する前に発生する。
/// エラーが返った操作は何の影響も残さない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    /// 書籍IDが存在しない
    #[error("Book {0} not found")]
    BookNotFound(BookId),

    /// 会員IDが存在しない
    #[error("Member {0} not found")]
    MemberNotFound(MemberId),

    /// 全冊が貸出中
    #[error("'{title}' is not available right now")]
    NoCopiesAvailable { book_id: BookId, title: String },

    /// 貸出中の書籍がある会員は削除できない
    #[error("Cannot delete member '{name}': {active_loans} book(s) still borrowed")]
    MemberHasActiveLoans {
        member_id: MemberId,
        name: String,
        active_loans: usize,
    },

    /// 会員がその書籍を借りていない
    #[error("No borrowed record found for book {book_id} and member {member_id}")]
    NoActiveLoan {
        member_id: MemberId,
        book_id: BookId,
    },

    /// 採番できるIDが残っていない
    #[error("No {0} ids left to assign")]
    IdsExhausted(&'static str),

    /// 記録が操作の想定する状態にない
    #[error("Invalid loan state: {0}")]
    InvalidLoanState(String),

    /// ドメイン層のエラー
    #[error("Domain error: {0}")]
    DomainError(String),
}

/// 図書館アプリケーション層のResult型
pub type Result<T> = std::result::Result<T, LibraryError>;
