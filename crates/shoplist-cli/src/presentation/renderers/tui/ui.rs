use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app::{Focus, TuiApp};
use super::components::{ItemListComponent, MenuBarView, NoticeView, StatusBarView};

const FORM_HEIGHT: u16 = 5;

pub(crate) fn draw(f: &mut Frame, app: &mut TuiApp) {
    let view = app.presenter.view();
    let form_height = if view.has_add_form() { FORM_HEIGHT } else { 0 };

    let [menu_area, list_area, form_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(form_height),
        Constraint::Length(3),
    ])
    .areas(f.area());

    f.render_widget(MenuBarView::new(view), menu_area);

    let rows = app.presenter.rows();
    let list_focused = app.focus == Focus::List && app.notice.is_none();
    app.lists
        .entry(view)
        .or_insert_with(ItemListComponent::new)
        .render(f, list_area, view.title(), rows, list_focused);

    if view.has_add_form() {
        let form_focused = app.focus == Focus::Form && app.notice.is_none();
        app.form.render(f, form_area, form_focused);
    }

    f.render_widget(
        StatusBarView::new(
            view,
            rows.len(),
            &app.status_message,
            app.focus == Focus::Form,
        ),
        status_area,
    );

    if let Some(notice) = &app.notice {
        f.render_widget(NoticeView::new(notice), f.area());
    }
}
