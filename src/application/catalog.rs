use crate::domain::{Book, BookId, commands::AddBook};

use super::errors::{LibraryError, Result};
use super::library::Library;

impl Library {
    /// 蔵書を追加する（全冊が書架にある状態）
    ///
    /// # エラー
    /// - IdsExhausted: 蔵書IDを使い切った
    pub fn add_book(&mut self, cmd: AddBook) -> Result<Book> {
        let book_id = self
            .books
            .next_id()
            .ok_or(LibraryError::IdsExhausted("book"))?;
        let book = Book::new(book_id, cmd.title, cmd.author, cmd.total_copies);
        self.books.save(book.clone());

        tracing::info!(
            book_id = %book.book_id,
            title = %book.title,
            copies = book.total_copies(),
            "book added"
        );
        Ok(book)
    }

    pub fn book(&self, book_id: BookId) -> Result<Book> {
        self.find_book(book_id)
    }

    /// 目録順の全書籍
    pub fn list_books(&self) -> Vec<Book> {
        self.books.find_all()
    }

    /// 書架に1冊以上ある書籍
    pub fn list_available_books(&self) -> Vec<Book> {
        self.books
            .find_all()
            .into_iter()
            .filter(Book::is_available)
            .collect()
    }

    /// タイトル・著者の部分一致検索（大文字小文字を区別しない）
    ///
    /// 該当なしはエラーではなく空の結果。
    pub fn search_books(&self, keyword: &str) -> Vec<Book> {
        let needle = keyword.to_lowercase();
        let found: Vec<Book> = self
            .books
            .find_all()
            .into_iter()
            .filter(|b| b.matches(&needle))
            .collect();

        tracing::debug!(keyword, matches = found.len(), "book search");
        found
    }
}
