use crate::domain::{Book, BookId};
use crate::ports::book_repository::BookRepository as BookRepositoryTrait;

/// インメモリ BookRepository
///
/// 登録順の`Vec`と、最後に採番したID
#[derive(Debug, Default)]
pub struct BookRepository {
    books: Vec<Book>,
    last_id: Option<BookId>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookRepositoryTrait for BookRepository {
    fn next_id(&mut self) -> Option<BookId> {
        let id = match self.last_id {
            Some(last) => last.next()?,
            None => BookId::new(1),
        };
        self.last_id = Some(id);
        Some(id)
    }

    fn save(&mut self, book: Book) {
        match self.books.iter_mut().find(|b| b.book_id == book.book_id) {
            Some(existing) => *existing = book,
            None => self.books.push(book),
        }
    }

    fn get_by_id(&self, book_id: BookId) -> Option<Book> {
        self.books.iter().find(|b| b.book_id == book_id).cloned()
    }

    fn find_all(&self) -> Vec<Book> {
        self.books.clone()
    }

    fn count(&self) -> usize {
        self.books.len()
    }
}
