use std::fmt;

use uuid::Uuid;

/// 貸出日数を指定しなかった場合の既定値
pub const DEFAULT_LOAN_DAYS: i64 = 15;

/// 書籍ID - 1から始まる連番の蔵書番号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(u32);

impl BookId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// 次に採番するID
    ///
    /// ID空間を使い切った場合は`None`
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 会員ID - 1から始まる連番。退会後も再利用しない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(u32);

impl MemberId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 貸出ID - 台帳上の貸出記録1件の識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoanId(Uuid);

impl LoanId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for LoanId {
    fn default() -> Self {
        Self::new()
    }
}

/// 貸出期間（日数）
///
/// 返却期限 = 貸出日 + 日数。
/// 0日なら当日が期限、負の日数なら貸出時点で既に延滞となる。
/// 暦の範囲外になる期限は`loan_book`が拒否する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanPeriod(i64);

impl LoanPeriod {
    pub fn new(days: i64) -> Self {
        Self(days)
    }

    pub fn days(&self) -> i64 {
        self.0
    }
}

impl Default for LoanPeriod {
    fn default() -> Self {
        Self(DEFAULT_LOAN_DAYS)
    }
}

impl From<i64> for LoanPeriod {
    fn from(days: i64) -> Self {
        Self(days)
    }
}
