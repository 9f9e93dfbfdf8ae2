//! 図書館の値をテキストに整形する
//!
//! すべて純粋関数。値を受け取り、表示する文字列を返す。

use crate::application::{BorrowReceipt, LibraryReport, LoanView, MemberSummary, ReturnReceipt};
use crate::domain::{Book, Member};

pub fn book_line(book: &Book) -> String {
    format!(
        "[{}] {} by {} | Total: {}, Available: {}",
        book.book_id,
        book.title,
        book.author,
        book.total_copies(),
        book.available_copies()
    )
}

pub fn member_line(summary: &MemberSummary) -> String {
    format!(
        "Member ID: {}, Name: {}, Borrowed Books: {}",
        summary.member.member_id, summary.member.name, summary.active_loans
    )
}

pub fn loan_line(view: &LoanView) -> String {
    let returned = match view.returned_on {
        Some(date) => date.to_string(),
        None => "Not yet returned".to_string(),
    };
    format!(
        "Member: {}, Book: {}, Borrowed: {}, Due: {}, Returned: {}",
        view.member_name, view.book_title, view.borrowed_on, view.due_on, returned
    )
}

/// 見出し付きの一覧。項目が無ければ`empty`を返す
pub fn listing<T>(title: &str, items: &[T], line: impl Fn(&T) -> String, empty: &str) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    let mut out = title.to_string();
    for item in items {
        out.push('\n');
        out.push_str(&line(item));
    }
    out
}

pub fn book_added(book: &Book) -> String {
    format!("Book '{}' added with ID {}.", book.title, book.book_id)
}

pub fn member_registered(member: &Member) -> String {
    format!(
        "Member '{}' registered with ID {}.",
        member.name, member.member_id
    )
}

pub fn member_deleted(member: &Member) -> String {
    format!("Member '{}' deleted.", member.name)
}

pub fn borrow_receipt(receipt: &BorrowReceipt) -> String {
    format!(
        "'{}' borrowed by {}.\nBorrow Date: {}, Due Date: {}\nCopies Left: {}/{}",
        receipt.book_title,
        receipt.member_name,
        receipt.borrowed_on,
        receipt.due_on,
        receipt.copies_left,
        receipt.total_copies
    )
}

pub fn return_receipt(receipt: &ReturnReceipt) -> String {
    let mut out = format!("'{}' returned by {}.", receipt.book_title, receipt.member_name);
    if receipt.was_late {
        out.push_str("\nThis book was returned late!");
    }
    out
}

pub fn report(report: &LibraryReport) -> String {
    format!(
        "===== Library Report =====\n\
         Total Books: {}\n\
         Total Members: {}\n\
         Active Borrowed Books: {}\n\
         Overdue Books: {}",
        report.total_books, report.total_members, report.active_loans, report.overdue_loans
    )
}
