use annotate_table::Record;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::widgets::Widget;

use crate::app_event::AppEvent;
use crate::detail_view::DetailView;
use crate::list_view::ListView;

/// The two UI modes. A tagged variant with an explicit transition match,
/// not per-mode view objects: committing on exit is shared state-machine
/// behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    List,
    Edit,
}

/// The session controller: owns the record store, both views, the
/// current mode, and the cursor. Every mode exit and every navigation
/// step while editing commits the draft back into the store; there is no
/// separate save action.
pub(crate) struct App {
    records: Vec<Record>,
    list: ListView,
    detail: DetailView,
    mode: Mode,
    cursor: usize,
    done: bool,
}

impl App {
    pub(crate) fn new(records: Vec<Record>) -> Self {
        let list = ListView::new(&records);
        Self {
            records,
            list,
            detail: DetailView::new(),
            mode: Mode::List,
            cursor: 0,
            done: false,
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.done
    }

    /// Hands the store back after the loop exits.
    pub(crate) fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub(crate) fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key_event(key),
            AppEvent::Resize(width, height) => self.resize(width, height),
            AppEvent::Tick => self.detail.toggle_blink(),
        }
    }

    pub(crate) fn resize(&mut self, width: u16, height: u16) {
        self.detail.resize(width, height);
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::List => self.handle_list_key(key),
            Mode::Edit => self.handle_edit_key(key),
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        // While the filter prompt is open every key belongs to it.
        if self.list.is_filter_editing() {
            self.list.handle_key_event(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.done = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.done = true;
            }
            KeyCode::Enter => {
                if let Some(position) = self.list.highlighted() {
                    self.open_record(position);
                    self.mode = Mode::Edit;
                }
            }
            _ => self.list.handle_key_event(key),
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.commit_draft();
                self.mode = Mode::List;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.commit_draft();
                self.mode = Mode::List;
            }
            // Tab/BackTab at the ends still commit; only the move is
            // skipped.
            KeyCode::Tab => {
                self.commit_draft();
                if self.cursor + 1 < self.records.len() {
                    self.open_record(self.cursor + 1);
                }
            }
            KeyCode::BackTab => {
                self.commit_draft();
                if self.cursor > 0 {
                    self.open_record(self.cursor - 1);
                }
            }
            KeyCode::PageUp => self.detail.page_up(),
            KeyCode::PageDown => self.detail.page_down(),
            _ => self.detail.handle_key_event(key),
        }
    }

    /// Writes the current draft into the store and refreshes the list's
    /// cached entry so its row reflects the committed value.
    fn commit_draft(&mut self) {
        let record = &mut self.records[self.cursor];
        record.annotation = self.detail.draft_value();
        self.list.replace_entry(self.cursor, record);
        tracing::debug!(position = self.cursor, "committed draft annotation");
    }

    /// Loads `position` into the detail panes: content scrolled to the
    /// top, draft seeded from the stored annotation with the cursor at
    /// its end, list highlight moved along.
    fn open_record(&mut self, position: usize) {
        self.cursor = position;
        let record = &self.records[position];
        self.detail.set_content(&record.source_text);
        self.detail.set_draft(&record.annotation);
        self.list.set_highlighted(position);
    }

    pub(crate) fn render(&mut self, area: Rect, buf: &mut Buffer) {
        match self.mode {
            Mode::List => self.list.render(area, buf),
            Mode::Edit => {
                let [header_area, detail_area] =
                    Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
                Line::from(format!("Record {}/{}", self.cursor + 1, self.records.len()))
                    .bold()
                    .render(header_area, buf);
                self.detail.render(detail_area, buf);
            }
        }
    }
}
