use chrono::{Days, NaiveDate};

use super::{
    BookId, BookLoaned, BookReturned, BorrowBookError, LoanId, LoanPeriod, MemberId,
    ReturnBookError,
};

/// 貸出記録 - 1冊を1人の会員に貸し出した記録
///
/// ライフサイクル：`returned_on = None`（貸出中）で作成され、
/// `return_book`によって一度だけ返却済みに更新される。
/// 台帳から削除されることはない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowRecord {
    pub loan_id: LoanId,

    // 他の集約への参照（IDのみ）
    pub book_id: BookId,
    pub member_id: MemberId,

    pub borrowed_on: NaiveDate,
    pub due_on: NaiveDate,
    pub returned_on: Option<NaiveDate>,
}

impl BorrowRecord {
    pub fn is_active(&self) -> bool {
        self.returned_on.is_none()
    }

    pub fn is_returned(&self) -> bool {
        self.returned_on.is_some()
    }
}

/// 利用者に見せる貸出状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanStatus {
    /// 貸出中（期限内）
    Active,
    /// 貸出中（期限切れ）
    Overdue,
    /// 返却済み
    Returned,
}

/// 書籍を貸し出す（純粋関数）
///
/// 返却期限は`borrowed_on`に貸出期間を足した日。
/// 副作用なし。新しい貸出記録とイベントを返す。
///
/// # エラー
/// 返却期限が暦の範囲外になる場合は`BorrowBookError::DueDateOutOfRange`
pub fn loan_book(
    book_id: BookId,
    member_id: MemberId,
    borrowed_on: NaiveDate,
    loan_period: LoanPeriod,
) -> Result<(BorrowRecord, BookLoaned), BorrowBookError> {
    let due_on = due_date(borrowed_on, loan_period).ok_or(BorrowBookError::DueDateOutOfRange)?;
    let loan_id = LoanId::new();

    let record = BorrowRecord {
        loan_id,
        book_id,
        member_id,
        borrowed_on,
        due_on,
        returned_on: None,
    };

    let event = BookLoaned {
        loan_id,
        book_id,
        member_id,
        borrowed_on,
        due_on,
    };

    Ok((record, event))
}

/// 書籍を返却する（純粋関数）
///
/// 延滞していても返却は受け付ける。延滞の有無はイベントに記録する。
pub fn return_book(
    record: &BorrowRecord,
    returned_on: NaiveDate,
) -> Result<(BorrowRecord, BookReturned), ReturnBookError> {
    if record.is_returned() {
        return Err(ReturnBookError::AlreadyReturned);
    }

    let returned = BorrowRecord {
        returned_on: Some(returned_on),
        ..record.clone()
    };

    let event = BookReturned {
        loan_id: record.loan_id,
        book_id: record.book_id,
        member_id: record.member_id,
        returned_on,
        was_overdue: is_overdue(&returned, returned_on),
    };

    Ok((returned, event))
}

/// 延滞判定（純粋関数）
///
/// 貸出中の記録は`today`が返却期限を過ぎたら延滞。
/// 返却済みの記録は`today`に関係なく、期限後に返却されたかで判定する。
pub fn is_overdue(record: &BorrowRecord, today: NaiveDate) -> bool {
    match record.returned_on {
        None => today > record.due_on,
        Some(returned_on) => returned_on > record.due_on,
    }
}

/// `today`時点の貸出状態（純粋関数）
pub fn status(record: &BorrowRecord, today: NaiveDate) -> LoanStatus {
    match record.returned_on {
        Some(_) => LoanStatus::Returned,
        None if is_overdue(record, today) => LoanStatus::Overdue,
        None => LoanStatus::Active,
    }
}

fn due_date(borrowed_on: NaiveDate, loan_period: LoanPeriod) -> Option<NaiveDate> {
    let days = Days::new(loan_period.days().unsigned_abs());
    if loan_period.days() < 0 {
        borrowed_on.checked_sub_days(days)
    } else {
        borrowed_on.checked_add_days(days)
    }
}
