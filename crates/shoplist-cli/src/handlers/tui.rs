use crate::presentation::ListPresenter;
use crate::presentation::renderers::TuiApp;
use anyhow::Result;

/// Run the interactive list and hand the presenter back for shutdown.
pub fn handle(presenter: ListPresenter) -> Result<ListPresenter> {
    let app = TuiApp::new(presenter).run()?;
    Ok(app.into_presenter())
}
