pub mod init;
pub mod item;
pub mod list;
pub mod tui;
