use crossterm::event::KeyEvent;

/// One step of the session loop. Keystrokes, layout changes, and the
/// cursor-blink tick all arrive through the same single queue; the
/// controller applies at most one transition per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    /// Terminal was resized to the given width/height.
    Resize(u16, u16),

    /// Periodic render-only tick driving the editable pane's cursor
    /// blink. Must never mutate the draft or the cursor position.
    Tick,
}
