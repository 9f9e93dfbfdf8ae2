pub mod book_repository;
pub mod loan_ledger;
pub mod member_repository;

pub use book_repository::BookRepository;
pub use loan_ledger::LoanLedger;
pub use member_repository::MemberRepository;
