use std::str::FromStr;

/// メインメニュー（毎回の入力前に表示）
pub const MENU: &str = "\
========= Library Management System =========
1. Display All Books
2. Display Available Books
3. Display All Members
4. Search Books
5. Borrow a Book
6. Return a Book
7. View Member's Borrowed Books
8. View Overdue Books
9. Library Report
10. Add New Book
11. Register New Member
12. Delete Member
0. Exit";

/// 番号付きメニュー項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    ListBooks,
    ListAvailableBooks,
    ListMembers,
    SearchBooks,
    BorrowBook,
    ReturnBook,
    MemberLoans,
    OverdueLoans,
    Report,
    AddBook,
    RegisterMember,
    DeleteMember,
}

/// メニュー番号以外の入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChoice(pub String);

impl FromStr for MenuChoice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(MenuChoice::Exit),
            "1" => Ok(MenuChoice::ListBooks),
            "2" => Ok(MenuChoice::ListAvailableBooks),
            "3" => Ok(MenuChoice::ListMembers),
            "4" => Ok(MenuChoice::SearchBooks),
            "5" => Ok(MenuChoice::BorrowBook),
            "6" => Ok(MenuChoice::ReturnBook),
            "7" => Ok(MenuChoice::MemberLoans),
            "8" => Ok(MenuChoice::OverdueLoans),
            "9" => Ok(MenuChoice::Report),
            "10" => Ok(MenuChoice::AddBook),
            "11" => Ok(MenuChoice::RegisterMember),
            "12" => Ok(MenuChoice::DeleteMember),
            other => Err(UnknownChoice(other.to_string())),
        }
    }
}
