use crate::presentation::ListPresenter;
use crate::presentation::renderers::ConsoleRenderer;
use anyhow::Result;

pub fn handle(presenter: &mut ListPresenter, all: bool, renderer: &ConsoleRenderer) -> Result<()> {
    if all {
        presenter.show_all()?;
    } else {
        presenter.show_to_purchase()?;
    }

    tracing::debug!(view = ?presenter.view(), shown = presenter.rows().len(), "listing items");

    let mut out = std::io::stdout().lock();
    renderer.render_list(&mut out, presenter.rows(), presenter.items())
}
