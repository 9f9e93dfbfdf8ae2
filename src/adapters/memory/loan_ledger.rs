use chrono::NaiveDate;

use crate::domain::{BorrowRecord, MemberId, loan};
use crate::ports::loan_ledger::LoanLedger as LoanLedgerTrait;

/// インメモリ LoanLedger
#[derive(Debug, Default)]
pub struct LoanLedger {
    records: Vec<BorrowRecord>,
}

impl LoanLedger {
    pub fn new() -> Self {
        Self::default()
    }

    fn filtered(&self, predicate: impl Fn(&BorrowRecord) -> bool) -> Vec<BorrowRecord> {
        self.records
            .iter()
            .filter(|&r| predicate(r))
            .cloned()
            .collect()
    }
}

impl LoanLedgerTrait for LoanLedger {
    fn append(&mut self, record: BorrowRecord) {
        self.records.push(record);
    }

    fn save(&mut self, record: BorrowRecord) -> bool {
        match self
            .records
            .iter_mut()
            .find(|r| r.loan_id == record.loan_id)
        {
            Some(existing) => {
                *existing = record;
                true
            }
            None => false,
        }
    }

    fn find_all(&self) -> Vec<BorrowRecord> {
        self.records.clone()
    }

    fn find_active(&self) -> Vec<BorrowRecord> {
        self.filtered(BorrowRecord::is_active)
    }

    fn find_active_for_member(&self, member_id: MemberId) -> Vec<BorrowRecord> {
        self.filtered(|r| r.member_id == member_id && r.is_active())
    }

    fn find_overdue_candidates(&self, today: NaiveDate) -> Vec<BorrowRecord> {
        self.filtered(|r| r.is_active() && loan::is_overdue(r, today))
    }
}
