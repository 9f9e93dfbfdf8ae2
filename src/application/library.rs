use chrono::NaiveDate;

use crate::adapters::memory;
use crate::domain::{Book, BookId, BorrowRecord, LoanPeriod, Member, MemberId, loan};
use crate::ports::*;

use super::errors::{LibraryError, Result};
use super::views::LoanView;

/// 図書館の依存関係
///
/// すべての依存を明示的に渡す。
/// 各ポートは別の実装に差し替えられる。
pub struct LibraryDependencies {
    pub books: Box<dyn BookRepository>,
    pub members: Box<dyn MemberRepository>,
    pub ledger: Box<dyn LoanLedger>,
    pub clock: Box<dyn Clock>,
}

impl LibraryDependencies {
    /// 指定した時計とインメモリ保存の組み合わせ
    pub fn in_memory(clock: impl Clock + 'static) -> Self {
        Self {
            books: Box::new(memory::BookRepository::new()),
            members: Box::new(memory::MemberRepository::new()),
            ledger: Box::new(memory::LoanLedger::new()),
            clock: Box::new(clock),
        }
    }
}

/// 図書館 - 蔵書目録・会員名簿・貸出台帳の唯一の所有者
///
/// 操作は関心ごとに`catalog`、`members`、`loan_service`、
/// `overdue_detection`に分かれている。
pub struct Library {
    pub(super) books: Box<dyn BookRepository>,
    pub(super) members: Box<dyn MemberRepository>,
    pub(super) ledger: Box<dyn LoanLedger>,
    pub(super) clock: Box<dyn Clock>,
    pub(super) default_loan_period: LoanPeriod,
}

impl Library {
    pub fn new(deps: LibraryDependencies, default_loan_period: LoanPeriod) -> Self {
        Self {
            books: deps.books,
            members: deps.members,
            ledger: deps.ledger,
            clock: deps.clock,
            default_loan_period,
        }
    }

    /// 空のインメモリ図書館（貸出期間は標準の15日）
    pub fn in_memory(clock: impl Clock + 'static) -> Self {
        Self::new(LibraryDependencies::in_memory(clock), LoanPeriod::default())
    }

    /// 貸出日数の指定が無いときに使う貸出期間
    pub fn default_loan_period(&self) -> LoanPeriod {
        self.default_loan_period
    }

    pub(super) fn find_book(&self, book_id: BookId) -> Result<Book> {
        self.books
            .get_by_id(book_id)
            .ok_or(LibraryError::BookNotFound(book_id))
    }

    pub(super) fn find_member(&self, member_id: MemberId) -> Result<Member> {
        self.members
            .get_by_id(member_id)
            .ok_or(LibraryError::MemberNotFound(member_id))
    }

    /// 台帳の記録に会員名と書名を結合する
    ///
    /// 返却済みの記録は削除済み会員を指すことがあり、その場合はIDで表示する。
    pub(super) fn build_loan_view(&self, record: &BorrowRecord, today: NaiveDate) -> LoanView {
        let member_name = self
            .members
            .get_by_id(record.member_id)
            .map(|m| m.name)
            .unwrap_or_else(|| format!("member #{}", record.member_id));
        let book_title = self
            .books
            .get_by_id(record.book_id)
            .map(|b| b.title)
            .unwrap_or_else(|| format!("book #{}", record.book_id));

        LoanView {
            loan_id: record.loan_id,
            member_id: record.member_id,
            member_name,
            book_id: record.book_id,
            book_title,
            borrowed_on: record.borrowed_on,
            due_on: record.due_on,
            returned_on: record.returned_on,
            status: loan::status(record, today),
        }
    }
}
