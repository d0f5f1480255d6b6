use std::io;
use std::io::Stdout;
use std::time::Duration;

use crossterm::event::Event;
use crossterm::event::KeyEventKind;
use crossterm::execute;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::app_event::AppEvent;

/// Poll timeout for the event pump. Expiry becomes a render-only
/// `AppEvent::Tick` on the same queue as keystrokes, which is what
/// drives the draft cursor blink without a second thread.
pub(crate) const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub(crate) type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal into raw mode on the alternate screen and chains a
/// panic hook that restores it, so a crash never leaves the shell raw.
pub(crate) fn init() -> io::Result<Tui> {
    install_panic_hook();
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(io::stdout()))
}

pub(crate) fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        original_hook(info);
    }));
}

/// Blocks until the next loop event. Key releases, mouse movement, and
/// other terminal noise collapse into `Tick` (a redraw, nothing more).
pub(crate) fn next_event() -> io::Result<AppEvent> {
    if !crossterm::event::poll(TICK_INTERVAL)? {
        return Ok(AppEvent::Tick);
    }
    match crossterm::event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(AppEvent::Key(key)),
        Event::Resize(width, height) => Ok(AppEvent::Resize(width, height)),
        _ => Ok(AppEvent::Tick),
    }
}
