mod catalog;
mod errors;
mod library;
mod loan_service;
mod members;
mod overdue_detection;
mod views;

pub use errors::{LibraryError, Result};
pub use library::{Library, LibraryDependencies};
pub use views::{BorrowReceipt, LibraryReport, LoanView, MemberSummary, ReturnReceipt};
