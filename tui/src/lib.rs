//! The interactive annotation session: a two-mode terminal UI over an
//! in-memory record store. The caller loads the store, hands it to
//! [`run`], and receives it back annotated once the user quits; all file
//! I/O happens outside this crate.

mod app;
mod app_event;
mod detail_view;
mod list_view;
mod tui;

use std::io;

use annotate_table::Record;

use crate::app::App;

/// Runs the annotation session over `records` until the user quits, then
/// hands the store back. The terminal is put into raw mode on the
/// alternate screen for the duration and restored on every exit path,
/// including panics.
pub fn run(records: Vec<Record>) -> io::Result<Vec<Record>> {
    let mut terminal = tui::init()?;
    let mut app = App::new(records);
    let size = terminal.size()?;
    app.resize(size.width, size.height);
    tracing::debug!("annotation session started");

    let result = run_loop(&mut terminal, &mut app);
    tui::restore()?;
    result?;
    tracing::debug!("annotation session finished");

    Ok(app.into_records())
}

/// One event per step, at most one transition, then a redraw.
fn run_loop(terminal: &mut tui::Tui, app: &mut App) -> io::Result<()> {
    while !app.is_done() {
        terminal.draw(|frame| app.render(frame.area(), frame.buffer_mut()))?;
        app.handle_event(tui::next_event()?);
    }
    Ok(())
}
