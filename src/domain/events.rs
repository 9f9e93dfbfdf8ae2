use chrono::NaiveDate;

use super::{BookId, LoanId, MemberId};

/// イベント: 書籍が貸し出された
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookLoaned {
    pub loan_id: LoanId,
    pub book_id: BookId,
    pub member_id: MemberId,
    pub borrowed_on: NaiveDate,
    pub due_on: NaiveDate,
}

/// イベント: 書籍が返却された
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookReturned {
    pub loan_id: LoanId,
    pub book_id: BookId,
    pub member_id: MemberId,
    pub returned_on: NaiveDate,
    pub was_overdue: bool,
}
