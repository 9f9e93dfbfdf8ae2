use std::io::{self, BufRead, Write};

use crate::application::Library;
use crate::domain::{
    BookId, MemberId,
    commands::{AddBook, BorrowBook, RegisterMember, ReturnBook},
};

use super::display;
use super::error::CommandError;
use super::menu::{MENU, MenuChoice};
use super::prompt::Prompt;

/// 1つの`Library`を操作する対話メニュー
pub struct Session<R, W> {
    library: Library,
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(library: Library, input: R, output: W) -> Self {
        Self {
            library,
            prompt: Prompt::new(input, output),
        }
    }

    /// 終了後に図書館と出力先を返す
    pub fn into_parts(self) -> (Library, W) {
        (self.library, self.prompt.into_output())
    }

    /// 0が選ばれるか入力が尽きるまでメニューを繰り返す
    ///
    /// エラーで終了するのは端末の入出力エラーのときだけ。
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.prompt.output(), "\n{}", MENU)?;

            let Some(answer) = self.prompt.ask("\nEnter your choice: ")? else {
                tracing::debug!("input closed, leaving menu");
                break;
            };

            let choice = match answer.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(self.prompt.output(), "Invalid choice, try again.")?;
                    continue;
                }
            };

            if choice == MenuChoice::Exit {
                writeln!(self.prompt.output(), "\nExiting... Goodbye!")?;
                break;
            }

            match self.execute(choice) {
                Ok(message) => writeln!(self.prompt.output(), "\n{}", message)?,
                Err(CommandError::Io(e)) => return Err(e),
                Err(CommandError::EndOfInput) => break,
                Err(err) => {
                    let line = err.report();
                    writeln!(self.prompt.output(), "\n{}", line)?;
                }
            }
        }
        Ok(())
    }

    /// メニュー操作を1つ実行し、表示する文字列を返す
    fn execute(&mut self, choice: MenuChoice) -> Result<String, CommandError> {
        match choice {
            MenuChoice::ListBooks => Ok(display::listing(
                "--- All Books ---",
                &self.library.list_books(),
                display::book_line,
                "No books available.",
            )),
            MenuChoice::ListAvailableBooks => Ok(display::listing(
                "--- Available Books ---",
                &self.library.list_available_books(),
                display::book_line,
                "No available books right now.",
            )),
            MenuChoice::ListMembers => Ok(display::listing(
                "--- All Members ---",
                &self.library.list_members(),
                display::member_line,
                "No members found.",
            )),
            MenuChoice::SearchBooks => {
                let keyword = self.prompt.ask_text("Enter title or author: ")?;
                Ok(display::listing(
                    "Search Results:",
                    &self.library.search_books(&keyword),
                    display::book_line,
                    "No books found with that keyword.",
                ))
            }
            MenuChoice::BorrowBook => {
                let member_id = self.ask_member_id("Enter Member ID: ")?;
                let book_id = self.ask_book_id("Enter Book ID: ")?;
                // 貸出日数を尋ねる前に貸出できない組み合わせを弾く
                self.library.check_borrowable(member_id, book_id)?;
                let loan_period = self
                    .prompt
                    .ask_loan_period(self.library.default_loan_period())?;

                let receipt = self.library.borrow_book(BorrowBook {
                    member_id,
                    book_id,
                    loan_period,
                })?;
                Ok(display::borrow_receipt(&receipt))
            }
            MenuChoice::ReturnBook => {
                let member_id = self.ask_member_id("Enter Member ID: ")?;
                let book_id = self.ask_book_id("Enter Book ID: ")?;
                let receipt = self.library.return_book(ReturnBook { member_id, book_id })?;
                Ok(display::return_receipt(&receipt))
            }
            MenuChoice::MemberLoans => {
                let member_id = self.ask_member_id("Enter Member ID: ")?;
                let member = self.library.member(member_id)?;
                let loans = self.library.member_loans(member_id)?;
                Ok(display::listing(
                    &format!("Books borrowed by {}:", member.name),
                    &loans,
                    display::loan_line,
                    &format!("Books borrowed by {}:\nNo active borrowed books.", member.name),
                ))
            }
            MenuChoice::OverdueLoans => Ok(display::listing(
                "Overdue Books:",
                &self.library.overdue_loans(),
                display::loan_line,
                "Overdue Books:\nNo overdue books!",
            )),
            MenuChoice::Report => Ok(display::report(&self.library.report())),
            MenuChoice::AddBook => {
                let title = self.prompt.ask_text("Enter book title: ")?;
                let author = self.prompt.ask_text("Enter author name: ")?;
                let total_copies = self
                    .prompt
                    .ask_number::<u32>("Enter total copies: ", "total copies")?;
                let book = self.library.add_book(AddBook {
                    title,
                    author,
                    total_copies,
                })?;
                Ok(display::book_added(&book))
            }
            MenuChoice::RegisterMember => {
                let name = self.prompt.ask_text("Enter member name: ")?;
                let member = self.library.register_member(RegisterMember { name })?;
                Ok(display::member_registered(&member))
            }
            MenuChoice::DeleteMember => {
                let member_id = self.ask_member_id("Enter Member ID to delete: ")?;
                let member = self.library.delete_member(member_id)?;
                Ok(display::member_deleted(&member))
            }
            MenuChoice::Exit => Ok("Exiting... Goodbye!".to_string()),
        }
    }

    fn ask_member_id(&mut self, question: &str) -> Result<MemberId, CommandError> {
        self.prompt
            .ask_number::<u32>(question, "member id")
            .map(MemberId::new)
    }

    fn ask_book_id(&mut self, question: &str) -> Result<BookId, CommandError> {
        self.prompt
            .ask_number::<u32>(question, "book id")
            .map(BookId::new)
    }
}
