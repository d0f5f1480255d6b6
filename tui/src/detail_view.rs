use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use ratatui::widgets::Wrap;
use tui_textarea::CursorMove;
use tui_textarea::Input;
use tui_textarea::TextArea;

const PLACEHOLDER: &str = "Type your annotation here...";

/// Width/height given to each detail pane for a `width` x `height`
/// terminal: half the width and the full height minus the header/border
/// allowance. Pure, so applying the same size twice yields the same
/// layout.
pub(crate) fn pane_dims(width: u16, height: u16) -> (u16, u16) {
    ((width / 2).saturating_sub(2), height.saturating_sub(4))
}

/// The paired read/write editing view: a read-only content pane on the
/// left and the editable annotation draft on the right. Only the
/// editable pane receives keystrokes; the content pane responds solely
/// to page scrolling.
pub(crate) struct DetailView {
    content_lines: Vec<String>,
    scroll: usize,
    editor: TextArea<'static>,
    pane_width: u16,
    pane_height: u16,
    blink_on: bool,
}

impl DetailView {
    pub(crate) fn new() -> Self {
        Self {
            content_lines: Vec::new(),
            scroll: 0,
            editor: make_editor(""),
            pane_width: 0,
            pane_height: 0,
            blink_on: true,
        }
    }

    /// Loads the content pane and scrolls it back to the top.
    pub(crate) fn set_content(&mut self, text: &str) {
        self.content_lines = text.lines().map(str::to_string).collect();
        self.scroll = 0;
    }

    /// Seeds the editable pane with `text`, cursor at the end.
    pub(crate) fn set_draft(&mut self, text: &str) {
        self.editor = make_editor(text);
    }

    pub(crate) fn draft_value(&self) -> String {
        self.editor.lines().join("\n")
    }

    pub(crate) fn resize(&mut self, width: u16, height: u16) {
        (self.pane_width, self.pane_height) = pane_dims(width, height);
    }

    pub(crate) fn page_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(self.half_page());
    }

    pub(crate) fn page_down(&mut self) {
        let max_scroll = self.content_lines.len().saturating_sub(1);
        self.scroll = self.scroll.saturating_add(self.half_page()).min(max_scroll);
    }

    /// Forwards a keystroke verbatim to the editable pane.
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        self.editor.input(Input::from(key));
    }

    /// Render-only blink driven by the tick event; never touches the
    /// draft text or the edit cursor.
    pub(crate) fn toggle_blink(&mut self) {
        self.blink_on = !self.blink_on;
        self.editor.set_cursor_style(cursor_style(self.blink_on));
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer) {
        let [content_area, editor_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        Paragraph::new(self.content_lines.join("\n"))
            .block(Block::bordered().title("text"))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll.min(u16::MAX as usize) as u16, 0))
            .render(content_area, buf);
        (&self.editor).render(editor_area, buf);
    }

    fn half_page(&self) -> usize {
        (self.pane_height as usize / 2).max(1)
    }

    #[cfg(test)]
    pub(crate) fn scroll_top(&self) -> usize {
        self.scroll
    }

    #[cfg(test)]
    pub(crate) fn pane_size(&self) -> (u16, u16) {
        (self.pane_width, self.pane_height)
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> (usize, usize) {
        self.editor.cursor()
    }
}

fn make_editor(text: &str) -> TextArea<'static> {
    let mut editor = TextArea::from(text.lines());
    editor.set_block(Block::bordered().title("annotation"));
    editor.set_placeholder_text(PLACEHOLDER);
    editor.set_cursor_line_style(Style::default());
    editor.set_cursor_style(cursor_style(true));
    editor.move_cursor(CursorMove::Bottom);
    editor.move_cursor(CursorMove::End);
    editor
}

fn cursor_style(blink_on: bool) -> Style {
    if blink_on {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}
