pub mod presenter;
pub mod renderers;
pub mod view_models;

pub use presenter::{ActionError, ActionResult, ListPresenter, View};
pub use view_models::{ItemRowViewModel, LIST_HEADER};
