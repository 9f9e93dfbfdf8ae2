pub mod book_repository;
pub mod clock;
pub mod loan_ledger;
pub mod member_repository;

pub use book_repository::*;
pub use clock::*;
pub use loan_ledger::*;
pub use member_repository::*;
