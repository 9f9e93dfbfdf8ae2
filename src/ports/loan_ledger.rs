use chrono::NaiveDate;

use crate::domain::{BorrowRecord, MemberId};

/// 貸出台帳ポート
///
/// すべての貸出記録の追記専用履歴。記録は削除されず、
/// 返却時は同じ位置の記録が返却済みの版に置き換わる。
/// 検索結果はすべて台帳（追記）順。
pub trait LoanLedger {
    /// 台帳の末尾に記録を追加する
    fn append(&mut self, record: BorrowRecord);

    /// 同じ貸出IDの記録を置き換える
    ///
    /// 該当する記録が無ければ`false`
    fn save(&mut self, record: BorrowRecord) -> bool;

    /// 貸出中・返却済みを含む全記録
    fn find_all(&self) -> Vec<BorrowRecord>;

    /// 未返却の記録
    fn find_active(&self) -> Vec<BorrowRecord>;

    /// 会員の未返却の記録
    fn find_active_for_member(&self, member_id: MemberId) -> Vec<BorrowRecord>;

    /// 返却期限が`today`より前の未返却の記録
    fn find_overdue_candidates(&self, today: NaiveDate) -> Vec<BorrowRecord>;
}
