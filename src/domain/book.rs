use super::{BookId, CopyError};

/// 書籍 - 蔵書目録の1タイトルと所蔵冊数
///
/// 不変条件：`0 <= available_copies <= total_copies`
/// 冊数フィールドは非公開にし、`check_out` / `check_in`（1冊ずつ増減）
/// 以外では変更できないようにする。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    total_copies: u32,
    available_copies: u32,
}

impl Book {
    /// 新規登録（全冊が書架にある状態）
    pub fn new(
        book_id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        total_copies: u32,
    ) -> Self {
        Self {
            book_id,
            title: title.into(),
            author: author.into(),
            total_copies,
            available_copies: total_copies,
        }
    }

    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }

    pub fn available_copies(&self) -> u32 {
        self.available_copies
    }

    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    /// タイトルまたは著者の部分一致（大文字小文字を区別しない）
    ///
    /// `needle`は小文字化済みであること
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }

    /// 1冊貸し出す（純粋関数）
    ///
    /// # エラー
    /// 書架に1冊も無い場合は`CopyError::NoCopiesAvailable`
    pub fn check_out(&self) -> Result<Self, CopyError> {
        if self.available_copies == 0 {
            return Err(CopyError::NoCopiesAvailable);
        }
        Ok(Self {
            available_copies: self.available_copies - 1,
            ..self.clone()
        })
    }

    /// 1冊戻す（純粋関数）
    ///
    /// # エラー
    /// 全冊が書架にある場合は`CopyError::AllCopiesOnShelf`
    pub fn check_in(&self) -> Result<Self, CopyError> {
        if self.available_copies >= self.total_copies {
            return Err(CopyError::AllCopiesOnShelf);
        }
        Ok(Self {
            available_copies: self.available_copies + 1,
            ..self.clone()
        })
    }
}
