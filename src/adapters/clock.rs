use std::cell::Cell;
use std::rc::Rc;

use chrono::{Days, Local, NaiveDate};

use crate::ports::clock::Clock;

/// 実時計: ローカルタイムゾーンでの今日の日付
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// テスト用の固定時計
///
/// クローンは同じ日付を共有する。`Library`に渡した後も
/// 手元のハンドルから日付を進められる。
#[derive(Debug, Clone)]
pub struct FixedClock {
    today: Rc<Cell<NaiveDate>>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Rc::new(Cell::new(today)),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        self.today.set(today);
    }

    /// 日付を`days`日進める
    ///
    /// 表現できる最後の日付で止まる。
    pub fn advance_days(&self, days: u64) {
        let current = self.today.get();
        self.today
            .set(current.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX));
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}
