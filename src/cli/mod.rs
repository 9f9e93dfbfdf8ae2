pub mod display;
pub mod error;
pub mod menu;
pub mod prompt;
pub mod session;

pub use error::CommandError;
pub use menu::MenuChoice;
pub use session::Session;
