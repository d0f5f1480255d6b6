use annotate_table::Record;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::text::Text;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::StatefulWidget;
use ratatui::widgets::Widget;

/// Cached display copy of one record. Refreshed by an explicit
/// `replace_entry` call from the controller after every commit; never
/// aliased to the store.
struct ListEntry {
    title: String,
    label: String,
    description: String,
    annotated: bool,
}

impl ListEntry {
    fn new(record: &Record) -> Self {
        let annotated = !record.annotation.is_empty();
        let description = if annotated {
            record.annotation.clone()
        } else {
            record.source_text.clone()
        };
        Self {
            title: record.title.clone(),
            label: format!("{}. {}", record.position + 1, record.title),
            description,
            annotated,
        }
    }
}

/// Selectable, filterable list over the record store. Selection and the
/// filter operate on record positions; `highlighted` always reports a
/// store position, never a filtered row index.
pub(crate) struct ListView {
    entries: Vec<ListEntry>,
    /// Entry positions matching the current filter, in store order.
    visible: Vec<usize>,
    /// Index into `visible`.
    selected: usize,
    query: String,
    filter_editing: bool,
    list_state: ListState,
    /// Items that fit the last rendered list area, for PageUp/PageDown.
    last_page_rows: usize,
}

impl ListView {
    pub(crate) fn new(records: &[Record]) -> Self {
        let entries: Vec<ListEntry> = records.iter().map(ListEntry::new).collect();
        let visible = (0..entries.len()).collect();
        Self {
            entries,
            visible,
            selected: 0,
            query: String::new(),
            filter_editing: false,
            list_state: ListState::default(),
            last_page_rows: 10,
        }
    }

    /// Store position of the highlighted row, if any row is visible.
    pub(crate) fn highlighted(&self) -> Option<usize> {
        self.visible.get(self.selected).copied()
    }

    pub(crate) fn set_highlighted(&mut self, position: usize) {
        if let Some(row) = self.visible.iter().position(|&p| p == position) {
            self.selected = row;
        }
    }

    /// Refreshes the cached entry for `position` after a commit.
    pub(crate) fn replace_entry(&mut self, position: usize, record: &Record) {
        if let Some(entry) = self.entries.get_mut(position) {
            *entry = ListEntry::new(record);
        }
    }

    /// True while the filter prompt has input focus. The controller
    /// forwards every key here in that state, so `q` and Enter act on
    /// the prompt instead of quitting or opening the editor.
    pub(crate) fn is_filter_editing(&self) -> bool {
        self.filter_editing
    }

    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        if self.filter_editing {
            match key.code {
                KeyCode::Enter => self.filter_editing = false,
                KeyCode::Esc => {
                    self.query.clear();
                    self.filter_editing = false;
                    self.refilter();
                }
                KeyCode::Backspace => {
                    self.query.pop();
                    self.refilter();
                }
                KeyCode::Char(c) => {
                    self.query.push(c);
                    self.refilter();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(1),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(1),
            KeyCode::PageUp => self.select_previous(self.last_page_rows.max(1)),
            KeyCode::PageDown => self.select_next(self.last_page_rows.max(1)),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.visible.len().saturating_sub(1);
            }
            KeyCode::Char('/') => self.filter_editing = true,
            KeyCode::Esc if !self.query.is_empty() => {
                self.query.clear();
                self.refilter();
            }
            _ => {}
        }
    }

    fn select_previous(&mut self, step: usize) {
        self.selected = self.selected.saturating_sub(step);
    }

    fn select_next(&mut self, step: usize) {
        let last = self.visible.len().saturating_sub(1);
        self.selected = self.selected.saturating_add(step).min(last);
    }

    /// Recomputes the visible rows for the current query, keeping the
    /// highlight on the same record when it survives the filter.
    fn refilter(&mut self) {
        let keep = self.highlighted();
        let query = self.query.to_lowercase();
        self.visible = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| query.is_empty() || entry.title.to_lowercase().contains(&query))
            .map(|(position, _)| position)
            .collect();
        self.selected = keep
            .and_then(|position| self.visible.iter().position(|&p| p == position))
            .unwrap_or(0);
    }

    fn filter_line(&self) -> Line<'static> {
        if self.filter_editing {
            Line::from(vec![Span::from("/").bold(), Span::from(self.query.clone())]).cyan()
        } else if !self.query.is_empty() {
            Line::from(format!("filter: {}", self.query)).dim()
        } else {
            Line::from("")
        }
    }

    fn footer_hint_line() -> Line<'static> {
        vec![
            "↑/↓".bold(),
            " select".dim(),
            "   ".into(),
            "/".bold(),
            " filter".dim(),
            "   ".into(),
            "Enter".bold(),
            " annotate".dim(),
            "   ".into(),
            "q".bold(),
            " quit".dim(),
        ]
        .into()
    }

    pub(crate) fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let [title_area, filter_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        Line::from("Items to Annotate").bold().render(title_area, buf);
        self.filter_line().render(filter_area, buf);
        Self::footer_hint_line().render(footer_area, buf);

        // Two rows per item.
        self.last_page_rows = (list_area.height as usize / 2).max(1);

        let items: Vec<ListItem> = self
            .visible
            .iter()
            .map(|&position| {
                let entry = &self.entries[position];
                let description = if entry.annotated {
                    Line::from(entry.description.clone()).green()
                } else {
                    Line::from(entry.description.clone()).dim()
                };
                ListItem::new(Text::from(vec![
                    Line::from(entry.label.clone()).bold(),
                    description,
                ]))
            })
            .collect();

        self.list_state.select(if self.visible.is_empty() {
            None
        } else {
            Some(self.selected)
        });
        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        StatefulWidget::render(list, list_area, buf, &mut self.list_state);
    }
}
