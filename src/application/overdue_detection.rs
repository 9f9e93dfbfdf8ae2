use super::library::Library;
use super::views::{LibraryReport, LoanView};

impl Library {
    /// 延滞検出
    ///
    /// 返却期限が今日より前の未返却の貸出（台帳順）。
    /// 返却済みの記録は延滞返却であっても含めない。
    pub fn overdue_loans(&self) -> Vec<LoanView> {
        let today = self.clock.today();

        let overdue: Vec<LoanView> = self
            .ledger
            .find_overdue_candidates(today)
            .iter()
            .map(|r| self.build_loan_view(r, today))
            .collect();

        tracing::debug!(%today, count = overdue.len(), "overdue detection");
        overdue
    }

    /// 今日時点の蔵書数・会員数・貸出数
    pub fn report(&self) -> LibraryReport {
        let today = self.clock.today();

        LibraryReport {
            total_books: self.books.count(),
            total_members: self.members.count(),
            active_loans: self.ledger.find_active().len(),
            overdue_loans: self.ledger.find_overdue_candidates(today).len(),
        }
    }
}
