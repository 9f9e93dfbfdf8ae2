/// 冊数管理のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// 全冊が貸出中
    NoCopiesAvailable,
    /// 全冊が書架にあり、これ以上戻せない
    AllCopiesOnShelf,
}

/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowBookError {
    /// 返却期限が暦の範囲外
    DueDateOutOfRange,
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnBookError {
    /// 既に返却済み
    AlreadyReturned,
}
