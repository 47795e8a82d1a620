//! TUI Components
//!
//! Components own their UI state and input handling; the app only routes keys
//! and hands them the presenter's rows at render time.

pub mod add_form;
pub mod item_list;
pub mod menu_bar;
pub mod notice;
pub mod status_bar;

pub use add_form::{AddItemForm, FormAction};
pub use item_list::ItemListComponent;
pub use menu_bar::MenuBarView;
pub use notice::{Notice, NoticeView};
pub use status_bar::StatusBarView;
