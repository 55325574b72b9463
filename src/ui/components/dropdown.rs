//! Multi-select dropdown widget.
//!
//! The widget shows a one-line header with the current selections as removable
//! chips and expands into a list of checkable options. It owns only its
//! display state (open, hover, highlight, pending close). The selection itself
//! belongs to the parent: every handler takes the current [`SelectionSet`] by
//! reference and reports a change as [`Action::SetSelection`].
//!
//! Pointer handling follows the widget's mounted lifetime. While mounted the
//! parent forwards every mouse event; a pointer-down outside the rendered
//! bounds closes the list, and leaving the bounds schedules a close after the
//! configured delay unless the pointer comes back first. [`Dropdown::unmount`]
//! drops both the subscription and any pending close.

use crate::constants::{CLOSE_GLYPH, DROPDOWN_CLOSE_DELAY_MS};
use crate::selection::{display_text, SelectOption, SelectionSet, SelectionTarget};
use crate::ui::components::common::{field_border_color, FOCUS_COLOR};
use crate::ui::core::actions::Action;
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Clickable remove control of one rendered chip
#[derive(Debug, Clone, PartialEq, Eq)]
struct ChipHit {
    remove: Rect,
    value: String,
}

/// Multi-select dropdown bound to one popup-owned selection.
pub struct Dropdown {
    label: String,
    options: Vec<SelectOption>,
    target: SelectionTarget,
    close_delay: Duration,

    open: bool,
    mounted: bool,
    focused: bool,
    hovered: bool,
    hovered_option: Option<usize>,
    highlighted: usize,
    pending_close: Option<Instant>,

    // Hit regions from the last render
    header_area: Rect,
    list_area: Option<Rect>,
    chips: Vec<ChipHit>,
}

impl Dropdown {
    pub fn new(label: impl Into<String>, options: Vec<SelectOption>, target: SelectionTarget) -> Self {
        Self {
            label: label.into(),
            options,
            target,
            close_delay: Duration::from_millis(DROPDOWN_CLOSE_DELAY_MS),
            open: false,
            mounted: false,
            focused: false,
            hovered: false,
            hovered_option: None,
            highlighted: 0,
            pending_close: None,
            header_area: Rect::default(),
            list_area: None,
            chips: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_close_delay(mut self, delay: Duration) -> Self {
        self.close_delay = delay;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn hovered_option(&self) -> Option<usize> {
        self.hovered_option
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Deadline of the scheduled close, if any
    pub fn pending_close(&self) -> Option<Instant> {
        self.pending_close
    }

    /// Start receiving pointer events from the parent
    pub fn mount(&mut self) {
        self.mounted = true;
        log::debug!("Dropdown {:?}: mounted", self.target);
    }

    /// Stop receiving pointer events and cancel any scheduled close
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.pending_close = None;
        self.hovered = false;
        self.hovered_option = None;
        log::debug!("Dropdown {:?}: unmounted", self.target);
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.close();
        }
    }

    pub fn toggle_open(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
            log::debug!("Dropdown {:?}: opened", self.target);
        }
    }

    pub fn close(&mut self) {
        if self.open {
            log::debug!("Dropdown {:?}: closed", self.target);
        }
        self.open = false;
        self.hovered_option = None;
        self.list_area = None;
        self.pending_close = None;
    }

    /// Compute the selection with `value` toggled and hand it to the owner.
    ///
    /// Does not touch the open state.
    pub fn toggle_option(&self, selected: &SelectionSet, value: &str) -> Action {
        let values = selected.toggled(value);
        log::info!(
            "Dropdown {:?}: '{}' {}",
            self.target,
            value,
            if values.contains(value) { "selected" } else { "removed" }
        );
        Action::SetSelection {
            target: self.target,
            values,
        }
    }

    /// Header area from the last render
    pub fn header_area(&self) -> Rect {
        self.header_area
    }

    /// Open list area from the last render
    pub fn list_area(&self) -> Option<Rect> {
        self.list_area
    }

    /// Remove control of the chip for `value`, if it was rendered
    pub fn chip_remove_area(&self, value: &str) -> Option<Rect> {
        self.chips.iter().find(|chip| chip.value == value).map(|chip| chip.remove)
    }

    /// Whether a cell lies within the header or the open list
    pub fn contains(&self, column: u16, row: u16) -> bool {
        LayoutManager::contains(self.header_area, column, row) || self.list_contains(column, row)
    }

    /// Whether a cell lies within the open list
    pub fn list_contains(&self, column: u16, row: u16) -> bool {
        self.list_area
            .map(|area| LayoutManager::contains(area, column, row))
            .unwrap_or(false)
    }

    /// Handle a pointer event that the parent has routed to this widget.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, selected: &SelectionSet, now: Instant) -> Action {
        if !self.mounted {
            return Action::None;
        }

        if !self.contains(mouse.column, mouse.row) {
            self.handle_outside_pointer(mouse, now);
            return Action::None;
        }

        self.pointer_entered();
        self.hovered_option = self.option_at(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(_) => {
                // The list is painted last, so it wins over chips beneath it
                if self.list_contains(mouse.column, mouse.row) {
                    if let Some(index) = self.option_at(mouse.column, mouse.row) {
                        self.highlighted = index;
                        let value = self.options[index].value.clone();
                        return self.toggle_option(selected, &value);
                    }
                    return Action::None;
                }
                if let Some(value) = self.chip_at(mouse.column, mouse.row) {
                    return self.toggle_option(selected, &value);
                }
                if LayoutManager::contains(self.header_area, mouse.column, mouse.row) {
                    self.toggle_open();
                }
                Action::None
            }
            MouseEventKind::ScrollDown if self.open => {
                self.move_highlight(1);
                Action::None
            }
            MouseEventKind::ScrollUp if self.open => {
                self.move_highlight(-1);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Handle a pointer event that happened outside this widget, or over
    /// something painted on top of it.
    pub fn handle_outside_pointer(&mut self, mouse: MouseEvent, now: Instant) {
        if !self.mounted {
            return;
        }

        if self.hovered {
            self.pointer_left(now);
        }

        if let MouseEventKind::Down(_) = mouse.kind {
            if self.open {
                log::debug!("Dropdown {:?}: pointer down outside", self.target);
                self.close();
            }
        }
    }

    /// Fire the scheduled close once its deadline has passed.
    ///
    /// Returns true if the widget closed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        match self.pending_close {
            Some(deadline) if now >= deadline => {
                log::debug!("Dropdown {:?}: hover close delay elapsed", self.target);
                self.close();
                true
            }
            _ => false,
        }
    }

    fn pointer_entered(&mut self) {
        if !self.hovered {
            self.hovered = true;
            self.pending_close = None;
        }
    }

    fn pointer_left(&mut self, now: Instant) {
        self.hovered = false;
        self.hovered_option = None;
        if self.open {
            // A new leave replaces the previous deadline
            self.pending_close = Some(now + self.close_delay);
        }
    }

    fn chip_at(&self, column: u16, row: u16) -> Option<String> {
        self.chips
            .iter()
            .find(|chip| LayoutManager::contains(chip.remove, column, row))
            .map(|chip| chip.value.clone())
    }

    fn option_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area?;
        if !LayoutManager::contains(area, column, row) {
            return None;
        }
        // Rows sit inside the list border
        if row <= area.y || row >= area.bottom().saturating_sub(1) {
            return None;
        }
        let index = (row - area.y - 1) as usize;
        (index < self.options.len()).then_some(index)
    }

    fn move_highlight(&mut self, delta: isize) {
        if self.options.is_empty() {
            return;
        }
        let len = self.options.len() as isize;
        self.highlighted = (self.highlighted as isize + delta).rem_euclid(len) as usize;
    }

    /// Handle a key while the widget has focus
    pub fn handle_key(&mut self, key: KeyEvent, selected: &SelectionSet) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') if !self.open => {
                self.toggle_open();
                Action::None
            }
            KeyCode::Down if !self.open => {
                self.toggle_open();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.options.get(self.highlighted) {
                Some(option) => {
                    let value = option.value.clone();
                    self.toggle_option(selected, &value)
                }
                None => Action::None,
            },
            KeyCode::Down => {
                self.move_highlight(1);
                Action::None
            }
            KeyCode::Up => {
                self.move_highlight(-1);
                Action::None
            }
            KeyCode::Esc if self.open => {
                self.close();
                Action::None
            }
            KeyCode::Backspace => match selected.last() {
                Some(value) => self.toggle_option(selected, value),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    /// Render the header and record hit regions for chips and the list.
    ///
    /// The open list itself is painted separately by [`Dropdown::render_list`]
    /// so the parent can draw it above everything else.
    pub fn render(&mut self, f: &mut Frame, area: Rect, selected: &SelectionSet) {
        self.header_area = area;
        self.chips.clear();

        let border_color = if self.hovered && !self.focused {
            Color::White
        } else {
            field_border_color(self.focused, false)
        };
        let caret = if self.open { " ▴ " } else { " ▾ " };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.label))
            .title_style(Style::default().fg(Color::White))
            .title_bottom(Line::from(caret).right_aligned())
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let line = if selected.is_empty() {
            let hint = self
                .options
                .first()
                .map(|option| option.text.as_str())
                .unwrap_or(self.label.as_str());
            Line::from(Span::styled(
                hint.to_string(),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))
        } else {
            self.chip_line(selected, inner)
        };
        f.render_widget(Paragraph::new(line), inner);

        self.list_area = if self.open {
            Some(LayoutManager::dropdown_list_rect(
                area,
                self.options.len() as u16,
                f.area(),
            ))
        } else {
            None
        };
    }

    /// Lay out one chip per selected value, recording the remove controls that fit
    fn chip_line(&mut self, selected: &SelectionSet, inner: Rect) -> Line<'static> {
        let chip_style = Style::default().fg(Color::Black).bg(Color::Cyan);
        let remove_style = chip_style.fg(Color::Red).add_modifier(Modifier::BOLD);

        let mut spans = Vec::new();
        let mut x = inner.x;
        for value in selected.iter() {
            let text = display_text(&self.options, value).to_string();
            let label = Span::styled(format!(" {} ", text), chip_style);
            let remove = Span::styled(format!("{} ", CLOSE_GLYPH), remove_style);

            let remove_x = x.saturating_add(label.width() as u16);
            if remove_x < inner.right() && inner.height > 0 {
                self.chips.push(ChipHit {
                    remove: Rect::new(remove_x, inner.y, 1, 1),
                    value: value.to_string(),
                });
            }
            x = remove_x.saturating_add(remove.width() as u16 + 1);

            spans.push(label);
            spans.push(remove);
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    /// Paint the open option list on top of whatever is already drawn
    pub fn render_list(&self, f: &mut Frame, selected: &SelectionSet) {
        let Some(area) = self.list_area else {
            return;
        };

        let items: Vec<ListItem> = self
            .options
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let checked = selected.contains(&option.value);
                let mark = if checked { "[x] " } else { "[ ] " };
                let mut style = if checked {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                };
                if self.hovered_option == Some(index) || (self.focused && self.highlighted == index) {
                    style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
                }
                ListItem::new(Line::from(vec![Span::raw(mark), Span::raw(option.text.clone())])).style(style)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(FOCUS_COLOR))
                .style(Style::default().bg(Color::Black)),
        );

        f.render_widget(Clear, area);
        f.render_widget(list, area);
    }
}
