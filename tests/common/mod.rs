#![allow(dead_code)]

use chrono::NaiveDate;
use rusty_library_cli::adapters::FixedClock;
use rusty_library_cli::application::Library;
use rusty_library_cli::domain::commands::{AddBook, RegisterMember};
use rusty_library_cli::domain::{Book, Member};

/// 各テストシナリオの初日
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// 空のインメモリ図書館と、その時計のハンドル
pub fn create_test_library() -> (Library, FixedClock) {
    let clock = FixedClock::new(start_date());
    (Library::in_memory(clock.clone()), clock)
}

pub fn add_book(library: &mut Library, title: &str, author: &str, copies: u32) -> Book {
    library
        .add_book(AddBook {
            title: title.to_string(),
            author: author.to_string(),
            total_copies: copies,
        })
        .unwrap()
}

pub fn register(library: &mut Library, name: &str) -> Member {
    library
        .register_member(RegisterMember {
            name: name.to_string(),
        })
        .unwrap()
}

/// すべての書籍で 0 <= 貸出可能冊数 <= 所蔵冊数 が成り立つ
pub fn assert_copy_invariant(library: &Library) {
    for book in library.list_books() {
        assert!(
            book.available_copies() <= book.total_copies(),
            "book {} has {} of {} copies available",
            book.book_id,
            book.available_copies(),
            book.total_copies()
        );
    }
}
