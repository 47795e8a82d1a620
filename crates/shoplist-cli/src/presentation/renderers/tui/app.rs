use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::components::{AddItemForm, FormAction, ItemListComponent, Notice};
use crate::presentation::{ActionError, ListPresenter, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    List,
    Form,
}

/// Interactive state around the presenter: per-view lists, the add form,
/// the pending notice and keyboard routing.
pub struct TuiApp {
    pub(crate) presenter: ListPresenter,
    /// One list component per view, so each view keeps its own selection
    pub(crate) lists: HashMap<View, ItemListComponent>,
    pub(crate) form: AddItemForm,
    pub(crate) focus: Focus,
    pub(crate) notice: Option<Notice>,
    pub(crate) status_message: String,
    pub(crate) should_quit: bool,
}

impl TuiApp {
    pub fn new(presenter: ListPresenter) -> Self {
        let lists = View::ALL
            .into_iter()
            .map(|view| (view, ItemListComponent::new()))
            .collect();

        Self {
            presenter,
            lists,
            form: AddItemForm::new(),
            focus: Focus::List,
            notice: None,
            status_message: String::new(),
            should_quit: false,
        }
    }

    pub fn presenter(&self) -> &ListPresenter {
        &self.presenter
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Hand the presenter back so the caller can close the store.
    pub fn into_presenter(self) -> ListPresenter {
        self.presenter
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // The notice blocks everything until acknowledged
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notice = None;
            }
            return;
        }

        if self.focus == Focus::Form {
            match self.form.handle_input(key) {
                Some(FormAction::Submit) => self.submit_form(),
                Some(FormAction::Leave) => self.focus = Focus::List,
                None => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) | KeyCode::Char('1') => self.switch_view(View::ToPurchase),
            KeyCode::F(2) | KeyCode::Char('2') => self.switch_view(View::AllItems),
            KeyCode::Char('a') if self.presenter.view().has_add_form() => {
                self.focus = Focus::Form;
            }
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('t') | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('r') => {
                let result = self.presenter.refresh();
                self.report(result.map(|_| "Refreshed.".to_string()));
            }
            _ => {
                let len = self.presenter.rows().len();
                self.active_list_mut().handle_input(key, len);
            }
        }
    }

    fn active_list_mut(&mut self) -> &mut ItemListComponent {
        self.lists.entry(self.presenter.view()).or_default()
    }

    fn selected_line(&self) -> Option<String> {
        self.lists
            .get(&self.presenter.view())
            .and_then(|list| list.selected_line(self.presenter.rows()))
    }

    fn switch_view(&mut self, view: View) {
        self.focus = Focus::List;
        let result = self.presenter.show(view);
        self.report(result.map(|_| String::new()));
    }

    fn submit_form(&mut self) {
        let values = self.form.values();
        let result =
            self.presenter
                .add_item(&values.description, &values.quantity, &values.barcode);

        if result.is_ok() {
            self.form.clear();
        }
        self.report(result.map(|id| format!("Added item {}.", id)));
    }

    fn delete_selected(&mut self) {
        let selected = self.selected_line();
        let result = self.presenter.delete_selected(selected.as_deref());
        if result.is_ok() {
            self.active_list_mut().clear_selection();
        }
        self.report(result.map(|id| format!("Deleted item {}.", id)));
    }

    fn toggle_selected(&mut self) {
        let selected = self.selected_line();
        let result = self.presenter.toggle_selected(selected.as_deref());
        if result.is_ok() {
            self.active_list_mut().clear_selection();
        }
        self.report(result.map(|item| {
            format!(
                "Item {} is now {}.",
                item.id,
                crate::presentation::view_models::status_label(item.to_purchase)
            )
        }));
    }

    fn report(&mut self, result: Result<String, ActionError>) {
        match result {
            Ok(message) => self.status_message = message,
            Err(err) => {
                tracing::warn!("{}", err);
                self.notice = Some(Notice::error(err.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplist_store::Database;

    fn test_app() -> TuiApp {
        let presenter = ListPresenter::new(Database::open_in_memory().unwrap()).unwrap();
        TuiApp::new(presenter)
    }

    fn press(app: &mut TuiApp, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut TuiApp, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn add_via_form(app: &mut TuiApp, description: &str, quantity: &str) {
        press(app, KeyCode::Char('a'));
        type_text(app, description);
        press(app, KeyCode::Tab);
        type_text(app, quantity);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_has_one_list_per_view() {
        let app = test_app();
        assert_eq!(app.lists.len(), View::ALL.len());
        assert_eq!(app.presenter().view(), View::ToPurchase);
    }

    #[test]
    fn test_form_only_in_all_items_view() {
        let mut app = test_app();

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.focus, Focus::List);

        press(&mut app, KeyCode::F(2));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.focus, Focus::Form);
    }

    #[test]
    fn test_add_through_form_clears_fields() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('2'));

        add_via_form(&mut app, "Bread", "2");

        assert!(app.notice().is_none());
        assert_eq!(app.presenter().rows().len(), 1);
        assert_eq!(app.form.values().description, "");
        assert_eq!(app.status_message, "Added item 1.");
    }

    #[test]
    fn test_invalid_quantity_shows_blocking_notice() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('2'));

        add_via_form(&mut app, "Eggs", "abc");

        let notice = app.notice().expect("notice shown");
        assert_eq!(notice.message, "Quantity must be a number.");
        assert_eq!(app.presenter().store().count().unwrap(), 0);
        // Input is kept so the user can fix it
        assert_eq!(app.form.values().description, "Eggs");

        // Other keys are swallowed until the notice is dismissed
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Enter);
        assert!(app.notice().is_none());
    }

    #[test]
    fn test_delete_without_selection_reports_error() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('d'));

        let notice = app.notice().expect("notice shown");
        assert_eq!(notice.message, "Please select an item to delete.");
    }

    #[test]
    fn test_toggle_and_delete_selected_row() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('2'));
        add_via_form(&mut app, "Bread", "2");
        add_via_form(&mut app, "Milk", "1");
        press(&mut app, KeyCode::Esc);

        // Select the second row and toggle it
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('t'));
        assert!(app.notice().is_none());

        press(&mut app, KeyCode::Char('1'));
        let to_purchase: Vec<i64> = app.presenter().rows().iter().map(|r| r.id).collect();
        assert_eq!(to_purchase, vec![1]);

        // Delete the only row left in the to-purchase view
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('d'));
        assert!(app.presenter().rows().is_empty());

        press(&mut app, KeyCode::Char('2'));
        let all: Vec<i64> = app.presenter().rows().iter().map(|r| r.id).collect();
        assert_eq!(all, vec![2]);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());

        let mut app = test_app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_typing_q_in_form_does_not_quit() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "quinoa");

        assert!(!app.should_quit());
        assert_eq!(app.form.values().description, "quinoa");
    }
}
