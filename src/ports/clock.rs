use chrono::NaiveDate;

/// 暦ポート
///
/// 日単位で扱う。各操作は「今日」を一度だけ取得し、
/// その日付ですべての比較を行う。
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn today(&self) -> NaiveDate;
}
