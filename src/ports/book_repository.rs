use crate::domain::{Book, BookId};

/// 蔵書目録ポート
///
/// 実装は登録順を保持する。一覧はすべて最初に保存された順で返す。
#[cfg_attr(test, mockall::automock)]
pub trait BookRepository {
    /// 次の蔵書IDを採番する
    ///
    /// 1から連番。ID空間を使い切った場合は`None`
    fn next_id(&mut self) -> Option<BookId>;

    /// 新規追加、または同じIDの書籍を置き換える
    ///
    /// 置き換えた書籍は目録上の位置を保つ。
    fn save(&mut self, book: Book);

    fn get_by_id(&self, book_id: BookId) -> Option<Book>;

    /// 目録順の全書籍
    fn find_all(&self) -> Vec<Book>;

    fn count(&self) -> usize;
}
