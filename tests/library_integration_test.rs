use chrono::Days;
use rusty_library_cli::application::{LibraryError, LibraryReport};
use rusty_library_cli::domain::commands::{BorrowBook, ReturnBook};
use rusty_library_cli::domain::{BookId, LoanPeriod, LoanStatus, MemberId};

mod common;

use common::{add_book, assert_copy_invariant, create_test_library, register, start_date};

fn borrow(member_id: MemberId, book_id: BookId, days: Option<i64>) -> BorrowBook {
    BorrowBook {
        member_id,
        book_id,
        loan_period: days.map(LoanPeriod::new),
    }
}

// ============================================================================
// 貸出・返却のライフサイクル
// ============================================================================

#[test]
fn test_full_loan_lifecycle_with_late_return() {
    let (mut library, clock) = create_test_library();

    let dune = add_book(&mut library, "Dune", "Herbert", 2);
    assert_eq!(dune.book_id, BookId::new(1));
    assert_eq!(dune.available_copies(), 2);

    let alice = register(&mut library, "Alice");
    assert_eq!(alice.member_id, MemberId::new(1));

    // 1日だけ借りる
    let receipt = library
        .borrow_book(borrow(alice.member_id, dune.book_id, Some(1)))
        .unwrap();
    assert_eq!(receipt.due_on, start_date() + Days::new(1));
    assert_eq!(library.book(dune.book_id).unwrap().available_copies(), 1);

    // まだ延滞ではない
    assert!(library.overdue_loans().is_empty());

    // 返却しないまま期限を過ぎる
    clock.advance_days(2);
    let overdue = library.overdue_loans();
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].loan_id, receipt.loan_id);
    assert_eq!(overdue[0].status, LoanStatus::Overdue);

    // 延滞返却
    let returned = library
        .return_book(ReturnBook {
            member_id: alice.member_id,
            book_id: dune.book_id,
        })
        .unwrap();
    assert!(returned.was_late);
    assert_eq!(returned.returned_on, start_date() + Days::new(2));
    assert_eq!(library.book(dune.book_id).unwrap().available_copies(), 2);

    // 会員の貸出一覧と延滞一覧からは消え、台帳には残る
    assert!(library.member_loans(alice.member_id).unwrap().is_empty());
    assert!(library.overdue_loans().is_empty());

    let history = library.loan_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].loan_id, receipt.loan_id);
    assert_eq!(history[0].returned_on, Some(returned.returned_on));
}

#[test]
fn test_zero_and_negative_loan_periods() {
    let (mut library, _clock) = create_test_library();
    let dune = add_book(&mut library, "Dune", "Herbert", 2);
    let alice = register(&mut library, "Alice");

    let same_day = library
        .borrow_book(borrow(alice.member_id, dune.book_id, Some(0)))
        .unwrap();
    assert_eq!(same_day.due_on, start_date());

    let backdated = library
        .borrow_book(borrow(alice.member_id, dune.book_id, Some(-2)))
        .unwrap();
    assert_eq!(backdated.due_on, start_date() - Days::new(2));

    let overdue = library.overdue_loans();
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].loan_id, backdated.loan_id);

    // 台帳順で最も古い当日期限の記録が先に返却される
    let receipt = library
        .return_book(ReturnBook {
            member_id: alice.member_id,
            book_id: dune.book_id,
        })
        .unwrap();
    assert_eq!(receipt.loan_id, same_day.loan_id);
    assert!(!receipt.was_late);

    let receipt = library
        .return_book(ReturnBook {
            member_id: alice.member_id,
            book_id: dune.book_id,
        })
        .unwrap();
    assert!(receipt.was_late);
    assert_copy_invariant(&library);
}

#[test]
fn test_borrow_then_return_leaves_copies_unchanged() {
    let (mut library, _clock) = create_test_library();
    let book = add_book(&mut library, "Emma", "Austen", 3);
    let bob = register(&mut library, "Bob");

    library
        .borrow_book(borrow(bob.member_id, book.book_id, None))
        .unwrap();
    assert_eq!(library.book(book.book_id).unwrap().available_copies(), 2);

    library
        .return_book(ReturnBook {
            member_id: bob.member_id,
            book_id: book.book_id,
        })
        .unwrap();
    assert_eq!(library.book(book.book_id).unwrap().available_copies(), 3);
}

#[test]
fn test_borrow_unknown_book_mutates_nothing() {
    let (mut library, _clock) = create_test_library();
    let dune = add_book(&mut library, "Dune", "Herbert", 2);
    let alice = register(&mut library, "Alice");

    let result = library.borrow_book(borrow(alice.member_id, BookId::new(99), None));

    assert_eq!(result, Err(LibraryError::BookNotFound(BookId::new(99))));
    assert_eq!(library.book(dune.book_id).unwrap().available_copies(), 2);
    assert!(library.loan_history().is_empty());
    assert!(library.member_loans(alice.member_id).unwrap().is_empty());
}

#[test]
fn test_borrow_with_no_copies_left() {
    let (mut library, _clock) = create_test_library();
    let book = add_book(&mut library, "Rare Atlas", "Mercator", 1);
    let alice = register(&mut library, "Alice");
    let bob = register(&mut library, "Bob");

    library
        .borrow_book(borrow(alice.member_id, book.book_id, None))
        .unwrap();
    let result = library.borrow_book(borrow(bob.member_id, book.book_id, None));

    assert!(matches!(
        result,
        Err(LibraryError::NoCopiesAvailable { ref title, .. }) if title == "Rare Atlas"
    ));
    assert_eq!(library.book(book.book_id).unwrap().available_copies(), 0);
    assert_eq!(library.loan_history().len(), 1);
}

#[test]
fn test_return_by_wrong_member_is_rejected() {
    let (mut library, _clock) = create_test_library();
    let book = add_book(&mut library, "Dune", "Herbert", 1);
    let alice = register(&mut library, "Alice");
    let bob = register(&mut library, "Bob");
    library
        .borrow_book(borrow(alice.member_id, book.book_id, None))
        .unwrap();

    let result = library.return_book(ReturnBook {
        member_id: bob.member_id,
        book_id: book.book_id,
    });

    assert_eq!(
        result,
        Err(LibraryError::NoActiveLoan {
            member_id: bob.member_id,
            book_id: book.book_id,
        })
    );
    assert_eq!(library.book(book.book_id).unwrap().available_copies(), 0);
    assert_eq!(library.member_loans(alice.member_id).unwrap().len(), 1);
}

#[test]
fn test_copy_counts_stay_in_bounds_across_operations() {
    let (mut library, clock) = create_test_library();
    let dune = add_book(&mut library, "Dune", "Herbert", 2);
    let emma = add_book(&mut library, "Emma", "Austen", 1);
    let members: Vec<MemberId> = ["Alice", "Bob", "Carol"]
        .iter()
        .map(|name| register(&mut library, name).member_id)
        .collect();

    for (step, member_id) in members.iter().cycle().take(9).enumerate() {
        let book_id = if step % 2 == 0 { dune.book_id } else { emma.book_id };
        let _ = library.borrow_book(borrow(*member_id, book_id, Some(3)));
        assert_copy_invariant(&library);

        clock.advance_days(1);
        if step % 3 == 2 {
            let _ = library.return_book(ReturnBook {
                member_id: *member_id,
                book_id,
            });
            assert_copy_invariant(&library);
        }
    }

    // 貸出中の冊数 = 未返却の貸出記録数
    let report = library.report();
    let out: u32 = library
        .list_books()
        .iter()
        .map(|b| b.total_copies() - b.available_copies())
        .sum();
    assert_eq!(report.active_loans, out as usize);
}

// ============================================================================
// 会員
// ============================================================================

#[test]
fn test_member_deletion_waits_for_returns() {
    let (mut library, _clock) = create_test_library();
    let dune = add_book(&mut library, "Dune", "Herbert", 2);
    let emma = add_book(&mut library, "Emma", "Austen", 1);
    let alice = register(&mut library, "Alice");

    for book in [&dune, &emma] {
        library
            .borrow_book(borrow(alice.member_id, book.book_id, None))
            .unwrap();
    }

    assert!(matches!(
        library.delete_member(alice.member_id),
        Err(LibraryError::MemberHasActiveLoans { active_loans: 2, .. })
    ));

    library
        .return_book(ReturnBook {
            member_id: alice.member_id,
            book_id: dune.book_id,
        })
        .unwrap();
    assert!(library.delete_member(alice.member_id).is_err());

    library
        .return_book(ReturnBook {
            member_id: alice.member_id,
            book_id: emma.book_id,
        })
        .unwrap();
    let removed = library.delete_member(alice.member_id).unwrap();
    assert_eq!(removed.name, "Alice");
    assert!(library.list_members().is_empty());

    // 返却済みの貸出は記録に残る
    let history = library.loan_history();
    assert_eq!(history.len(), 2);
    assert!(history.iter().all(|v| v.status == LoanStatus::Returned));
}

#[test]
fn test_member_loans_in_ledger_order() {
    let (mut library, clock) = create_test_library();
    let dune = add_book(&mut library, "Dune", "Herbert", 1);
    let emma = add_book(&mut library, "Emma", "Austen", 1);
    let alice = register(&mut library, "Alice");
    let bob = register(&mut library, "Bob");

    library
        .borrow_book(borrow(alice.member_id, emma.book_id, None))
        .unwrap();
    clock.advance_days(1);
    library
        .borrow_book(borrow(bob.member_id, dune.book_id, None))
        .unwrap();
    library
        .return_book(ReturnBook {
            member_id: bob.member_id,
            book_id: dune.book_id,
        })
        .unwrap();
    library
        .borrow_book(borrow(alice.member_id, dune.book_id, None))
        .unwrap();

    let titles: Vec<String> = library
        .member_loans(alice.member_id)
        .unwrap()
        .into_iter()
        .map(|v| v.book_title)
        .collect();
    assert_eq!(titles, vec!["Emma", "Dune"]);
}

// ============================================================================
// 検索と集計
// ============================================================================

#[test]
fn test_search_books() {
    let (mut library, _clock) = create_test_library();
    add_book(&mut library, "Dune", "Herbert", 2);
    add_book(&mut library, "Pride and Prejudice", "Austen", 1);

    let by_title = library.search_books("dune");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "Dune");

    let by_author = library.search_books("herbert");
    assert_eq!(by_author.len(), 1);
    assert_eq!(by_author[0].author, "Herbert");

    assert!(library.search_books("xyz").is_empty());
}

#[test]
fn test_report_tracks_active_and_overdue() {
    let (mut library, clock) = create_test_library();
    let dune = add_book(&mut library, "Dune", "Herbert", 2);
    let emma = add_book(&mut library, "Emma", "Austen", 1);
    let alice = register(&mut library, "Alice");
    register(&mut library, "Bob");

    library
        .borrow_book(borrow(alice.member_id, dune.book_id, Some(2)))
        .unwrap();
    library
        .borrow_book(borrow(alice.member_id, emma.book_id, Some(10)))
        .unwrap();

    assert_eq!(
        library.report(),
        LibraryReport {
            total_books: 2,
            total_members: 2,
            active_loans: 2,
            overdue_loans: 0,
        }
    );

    clock.advance_days(5);
    assert_eq!(library.report().overdue_loans, 1);

    library
        .return_book(ReturnBook {
            member_id: alice.member_id,
            book_id: dune.book_id,
        })
        .unwrap();
    let report = library.report();
    assert_eq!(report.active_loans, 1);
    assert_eq!(report.overdue_loans, 0);
}
