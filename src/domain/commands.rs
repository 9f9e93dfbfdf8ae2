use super::{BookId, LoanPeriod, MemberId};

/// コマンド: 蔵書を追加する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBook {
    pub title: String,
    pub author: String,
    pub total_copies: u32,
}

/// コマンド: 会員を登録する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterMember {
    pub name: String,
}

/// コマンド: 書籍を貸し出す
///
/// `loan_period`が`None`なら図書館の既定の貸出期間を使う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorrowBook {
    pub member_id: MemberId,
    pub book_id: BookId,
    pub loan_period: Option<LoanPeriod>,
}

/// コマンド: 書籍を返却する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnBook {
    pub member_id: MemberId,
    pub book_id: BookId,
}
