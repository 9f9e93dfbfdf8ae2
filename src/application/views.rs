use chrono::NaiveDate;

use crate::domain::{BookId, LoanId, LoanStatus, Member, MemberId};

/// 貸出ビュー
///
/// 台帳の記録に会員名・書名を結合したもの。
/// 状態はビューを作成した操作の日付で評価する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanView {
    pub loan_id: LoanId,
    pub member_id: MemberId,
    pub member_name: String,
    pub book_id: BookId,
    pub book_title: String,
    pub borrowed_on: NaiveDate,
    pub due_on: NaiveDate,
    pub returned_on: Option<NaiveDate>,
    pub status: LoanStatus,
}

/// 会員一覧の1行（貸出中の冊数つき）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSummary {
    pub member: Member,
    pub active_loans: usize,
}

/// 貸出の控え
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowReceipt {
    pub loan_id: LoanId,
    pub member_name: String,
    pub book_title: String,
    pub borrowed_on: NaiveDate,
    pub due_on: NaiveDate,
    pub copies_left: u32,
    pub total_copies: u32,
}

/// 返却の控え
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnReceipt {
    pub loan_id: LoanId,
    pub member_name: String,
    pub book_title: String,
    pub returned_on: NaiveDate,
    pub due_on: NaiveDate,
    pub was_late: bool,
}

/// 図書館全体の集計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryReport {
    /// 冊数ではなくタイトル数
    pub total_books: usize,
    pub total_members: usize,
    pub active_loans: usize,
    pub overdue_loans: usize,
}
