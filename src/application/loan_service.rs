use crate::domain::{
    Book, BookId, CopyError, Member, MemberId, ReturnBookError,
    commands::{BorrowBook, ReturnBook},
    loan,
};

use super::errors::{LibraryError, Result};
use super::library::Library;
use super::views::{BorrowReceipt, LoanView, ReturnReceipt};

impl Library {
    /// 貸出可能かを確認する（何も変更しない）
    ///
    /// `borrow_book`と同じ規則で判定する。貸出日数を尋ねる前に
    /// 貸出できない組み合わせを弾くために使う。
    ///
    /// # エラー
    /// - MemberNotFound / BookNotFound: IDが存在しない
    /// - NoCopiesAvailable: 全冊が貸出中
    pub fn check_borrowable(&self, member_id: MemberId, book_id: BookId) -> Result<()> {
        self.prepare_borrow(member_id, book_id).map(|_| ())
    }

    /// 書籍を貸し出す
    ///
    /// ビジネスルール：
    /// - 会員が存在すること
    /// - 書籍が存在すること
    /// - 書架に1冊以上あること
    ///
    /// すべての確認を書き込みより先に行うため、失敗した貸出は
    /// 図書館の状態を一切変えない。
    pub fn borrow_book(&mut self, cmd: BorrowBook) -> Result<BorrowReceipt> {
        let today = self.clock.today();

        // 1. 会員・書籍の存在と在庫の確認
        let (member, checked_out) = self.prepare_borrow(cmd.member_id, cmd.book_id)?;

        // 2. ドメインの純粋関数
        let loan_period = cmd.loan_period.unwrap_or(self.default_loan_period);
        let (record, event) =
            loan::loan_book(checked_out.book_id, member.member_id, today, loan_period)
                .map_err(|e| LibraryError::DomainError(format!("{:?}", e)))?;

        // 3. 保存
        self.books.save(checked_out.clone());
        self.ledger.append(record);

        tracing::info!(
            loan_id = %event.loan_id.value(),
            member_id = %event.member_id,
            book_id = %event.book_id,
            due_on = %event.due_on,
            copies_left = checked_out.available_copies(),
            "book loaned"
        );

        Ok(BorrowReceipt {
            loan_id: event.loan_id,
            member_name: member.name,
            book_title: checked_out.title.clone(),
            borrowed_on: event.borrowed_on,
            due_on: event.due_on,
            copies_left: checked_out.available_copies(),
            total_copies: checked_out.total_copies(),
        })
    }

    /// 書籍を返却する
    ///
    /// ビジネスルール：
    /// - 会員と書籍が存在すること
    /// - 会員がその書籍を借りていること（台帳上で最も古い貸出を返却扱いにする）
    /// - 延滞していても受け付け、延滞の有無を控えに記載する
    pub fn return_book(&mut self, cmd: ReturnBook) -> Result<ReturnReceipt> {
        let today = self.clock.today();

        // 1. 会員と書籍の存在確認
        let member = self.find_member(cmd.member_id)?;
        let book = self.find_book(cmd.book_id)?;

        // 2. 未返却の貸出を探す
        let record = self
            .ledger
            .find_active_for_member(member.member_id)
            .into_iter()
            .find(|r| r.book_id == book.book_id)
            .ok_or(LibraryError::NoActiveLoan {
                member_id: member.member_id,
                book_id: book.book_id,
            })?;

        // 3. ドメインの純粋関数
        let (returned, event) = loan::return_book(&record, today).map_err(|e| match e {
            ReturnBookError::AlreadyReturned => {
                LibraryError::InvalidLoanState("Loan already returned".to_string())
            }
        })?;
        let checked_in = book
            .check_in()
            .map_err(|e| LibraryError::DomainError(format!("{:?}", e)))?;

        // 4. 保存
        if !self.ledger.save(returned) {
            return Err(LibraryError::InvalidLoanState(
                "Loan disappeared from the ledger".to_string(),
            ));
        }
        self.books.save(checked_in.clone());

        if event.was_overdue {
            tracing::warn!(
                loan_id = %event.loan_id.value(),
                member_id = %event.member_id,
                book_id = %event.book_id,
                due_on = %record.due_on,
                "book returned late"
            );
        } else {
            tracing::info!(
                loan_id = %event.loan_id.value(),
                member_id = %event.member_id,
                book_id = %event.book_id,
                "book returned"
            );
        }

        Ok(ReturnReceipt {
            loan_id: event.loan_id,
            member_name: member.name,
            book_title: checked_in.title,
            returned_on: event.returned_on,
            due_on: record.due_on,
            was_late: event.was_overdue,
        })
    }

    /// 会員の未返却の貸出（台帳順）
    pub fn member_loans(&self, member_id: MemberId) -> Result<Vec<LoanView>> {
        let today = self.clock.today();
        let member = self.find_member(member_id)?;

        Ok(self
            .ledger
            .find_active_for_member(member.member_id)
            .iter()
            .map(|r| self.build_loan_view(r, today))
            .collect())
    }

    /// 返却済みを含む全貸出記録（台帳順）
    pub fn loan_history(&self) -> Vec<LoanView> {
        let today = self.clock.today();

        self.ledger
            .find_all()
            .iter()
            .map(|r| self.build_loan_view(r, today))
            .collect()
    }

    /// 会員と書籍を解決し、1冊貸し出した後の書籍を返す
    fn prepare_borrow(&self, member_id: MemberId, book_id: BookId) -> Result<(Member, Book)> {
        let member = self.find_member(member_id)?;
        let book = self.find_book(book_id)?;

        let checked_out = book.check_out().map_err(|e| match e {
            CopyError::NoCopiesAvailable => LibraryError::NoCopiesAvailable {
                book_id: book.book_id,
                title: book.title.clone(),
            },
            other => LibraryError::DomainError(format!("{:?}", other)),
        })?;

        Ok((member, checked_out))
    }
}
