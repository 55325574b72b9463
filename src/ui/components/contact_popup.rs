//! Contact popup component.
//!
//! A modal that collects one free-text contact value (email or phone) and two
//! independent multi-selections. It owns all form state for its mounted
//! lifetime and talks to its host only through two actions:
//!
//! - [`Action::Next`] with a [`ContactSubmission`] once a submit attempt passes
//!   validation
//! - [`Action::Close`] when the user dismisses it
//!
//! Validation runs only on an explicit submit through the Next control.
//! Editing the contact value never clears or recomputes the error.

use crate::config::Config;
use crate::constants::{
    CLOSE_BUTTON, CLOSE_GLYPH, CONTACT_LABEL, MATERIALS_LABEL, NEXT_BUTTON, POPUP_DEFAULT_WIDTH_PERCENT,
    POPUP_HEIGHT_LINES, POPUP_MAX_WIDTH_PERCENT, POPUP_MIN_WIDTH_PERCENT, POPUP_TITLE, PREFERENCES_LABEL,
};
use crate::selection::{SelectOption, SelectionSet, SelectionTarget};
use crate::ui::components::common::{
    create_button, create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts,
    ERROR_COLOR, FOCUS_COLOR, OVERLAY_COLOR,
};
use crate::ui::components::dropdown::Dropdown;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::validation::{validate_contact, ContactError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Payload handed to the host when the popup completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Trimmed contact value
    pub contact_info: String,
    pub selected_materials: Vec<String>,
    pub selected_preferences: Vec<String>,
}

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupFocus {
    #[default]
    Contact,
    Materials,
    Preferences,
    Next,
    Close,
}

impl PopupFocus {
    const ORDER: [PopupFocus; 5] = [
        PopupFocus::Contact,
        PopupFocus::Materials,
        PopupFocus::Preferences,
        PopupFocus::Next,
        PopupFocus::Close,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Buttons that react to hover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupButton {
    Next,
    Close,
    CloseGlyph,
}

/// Modal popup collecting contact info and two multi-select preferences.
pub struct ContactPopup {
    title: String,
    width_percent: u16,

    contact_info: String,
    cursor_position: usize,
    selected_materials: SelectionSet,
    selected_preferences: SelectionSet,
    validation_error: Option<ContactError>,

    materials: Dropdown,
    preferences: Dropdown,
    focus: PopupFocus,
    hovered_button: Option<PopupButton>,
    mounted: bool,

    // Hit regions from the last render
    input_area: Rect,
    next_area: Rect,
    close_area: Rect,
    close_glyph_area: Rect,
}

impl ContactPopup {
    pub fn new(config: &Config) -> Self {
        Self::with_options(
            config.options.materials.clone(),
            config.options.preferences.clone(),
            config.ui.close_delay(),
        )
        .with_title(config.ui.title.clone())
        .with_width_percent(config.ui.popup_width_percent)
    }

    pub fn with_options(materials: Vec<SelectOption>, preferences: Vec<SelectOption>, close_delay: Duration) -> Self {
        let mut popup = Self {
            title: POPUP_TITLE.to_string(),
            width_percent: POPUP_DEFAULT_WIDTH_PERCENT,
            contact_info: String::new(),
            cursor_position: 0,
            selected_materials: SelectionSet::new(),
            selected_preferences: SelectionSet::new(),
            validation_error: None,
            materials: Dropdown::new(MATERIALS_LABEL, materials, SelectionTarget::Materials)
                .with_close_delay(close_delay),
            preferences: Dropdown::new(PREFERENCES_LABEL, preferences, SelectionTarget::Preferences)
                .with_close_delay(close_delay),
            focus: PopupFocus::Contact,
            hovered_button: None,
            mounted: false,
            input_area: Rect::default(),
            next_area: Rect::default(),
            close_area: Rect::default(),
            close_glyph_area: Rect::default(),
        };
        popup.apply_focus(PopupFocus::Contact);
        popup
    }

    #[must_use]
    pub fn with_title(mut self, title: String) -> Self {
        self.title = title;
        self
    }

    #[must_use]
    pub fn with_width_percent(mut self, width_percent: u16) -> Self {
        self.width_percent = width_percent.clamp(POPUP_MIN_WIDTH_PERCENT, POPUP_MAX_WIDTH_PERCENT);
        self
    }

    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn selected_materials(&self) -> &SelectionSet {
        &self.selected_materials
    }

    pub fn selected_preferences(&self) -> &SelectionSet {
        &self.selected_preferences
    }

    pub fn validation_error(&self) -> Option<ContactError> {
        self.validation_error
    }

    /// Message shown under the input, if the last submit failed
    pub fn error_message(&self) -> Option<String> {
        self.validation_error.map(|e| e.to_string())
    }

    pub fn focus(&self) -> PopupFocus {
        self.focus
    }

    pub fn hovered_button(&self) -> Option<PopupButton> {
        self.hovered_button
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn materials(&self) -> &Dropdown {
        &self.materials
    }

    pub fn preferences(&self) -> &Dropdown {
        &self.preferences
    }

    pub fn dropdown(&self, target: SelectionTarget) -> &Dropdown {
        match target {
            SelectionTarget::Materials => &self.materials,
            SelectionTarget::Preferences => &self.preferences,
        }
    }

    pub fn selection(&self, target: SelectionTarget) -> &SelectionSet {
        match target {
            SelectionTarget::Materials => &self.selected_materials,
            SelectionTarget::Preferences => &self.selected_preferences,
        }
    }

    /// Toggle an option through the owning dropdown, as a click on its row would
    pub fn toggle_option(&mut self, target: SelectionTarget, value: &str) -> Action {
        let action = self.dropdown(target).toggle_option(self.selection(target), value);
        self.update(action)
    }

    /// Move focus to a control, closing any dropdown list that loses it
    pub fn set_focus(&mut self, focus: PopupFocus) {
        if self.focus != focus {
            self.apply_focus(focus);
        }
    }

    fn apply_focus(&mut self, focus: PopupFocus) {
        self.focus = focus;
        self.materials.set_focused(focus == PopupFocus::Materials);
        self.preferences.set_focused(focus == PopupFocus::Preferences);
    }

    /// Replace the contact text and move the cursor to its end
    pub fn set_contact_info(&mut self, value: impl Into<String>) {
        self.contact_info = value.into();
        self.cursor_position = self.contact_info.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.contact_info
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.contact_info.len())
    }

    fn insert_char(&mut self, c: char) {
        let index = self.byte_index(self.cursor_position);
        self.contact_info.insert(index, c);
        self.cursor_position += 1;
    }

    fn delete_before_cursor(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        let index = self.byte_index(self.cursor_position);
        self.contact_info.remove(index);
    }

    fn delete_at_cursor(&mut self) {
        if self.cursor_position < self.contact_info.chars().count() {
            let index = self.byte_index(self.cursor_position);
            self.contact_info.remove(index);
        }
    }

    /// Explicit confirmation: validate, then complete or surface the error.
    pub fn submit(&mut self) -> Action {
        match validate_contact(&self.contact_info) {
            Ok(contact) => {
                self.validation_error = None;
                let submission = ContactSubmission {
                    contact_info: contact.to_string(),
                    selected_materials: self.selected_materials.as_slice().to_vec(),
                    selected_preferences: self.selected_preferences.as_slice().to_vec(),
                };
                log::info!(
                    "Popup: submitted with {} material(s), {} preference(s)",
                    submission.selected_materials.len(),
                    submission.selected_preferences.len()
                );
                Action::Next(submission)
            }
            Err(error) => {
                log::info!("Popup: validation failed: {:?}", error);
                self.validation_error = Some(error);
                Action::None
            }
        }
    }

    /// Explicit dismissal. No validation and no state reset.
    pub fn dismiss(&mut self) -> Action {
        log::info!("Popup: dismissed");
        Action::Close
    }

    /// Route a mouse event with an explicit timestamp for the hover-close timers
    pub fn handle_mouse_at(&mut self, mouse: MouseEvent, now: Instant) -> Action {
        if !self.mounted {
            return Action::None;
        }

        let (column, row) = (mouse.column, mouse.row);
        let over_materials_list = self.materials.list_contains(column, row);
        let over_preferences_list = self.preferences.list_contains(column, row);

        // An open list is painted above everything else and shields what is under it
        let materials_action = if over_preferences_list {
            self.materials.handle_outside_pointer(mouse, now);
            Action::None
        } else {
            self.materials.handle_mouse(mouse, &self.selected_materials, now)
        };
        let preferences_action = if over_materials_list {
            self.preferences.handle_outside_pointer(mouse, now);
            Action::None
        } else {
            self.preferences.handle_mouse(mouse, &self.selected_preferences, now)
        };

        let covered = over_materials_list || over_preferences_list;
        self.hovered_button = if covered { None } else { self.button_at(column, row) };

        if !materials_action.is_none() {
            return self.update(materials_action);
        }
        if !preferences_action.is_none() {
            return self.update(preferences_action);
        }

        if let MouseEventKind::Down(_) = mouse.kind {
            if over_materials_list || (!covered && self.materials.contains(column, row)) {
                self.set_focus(PopupFocus::Materials);
            } else if over_preferences_list || (!covered && self.preferences.contains(column, row)) {
                self.set_focus(PopupFocus::Preferences);
            } else if LayoutManager::contains(self.input_area, column, row) {
                self.set_focus(PopupFocus::Contact);
                self.cursor_position = self.contact_info.chars().count();
            } else {
                match self.button_at(column, row) {
                    Some(PopupButton::Next) => {
                        self.set_focus(PopupFocus::Next);
                        return self.submit();
                    }
                    Some(PopupButton::Close) | Some(PopupButton::CloseGlyph) => return self.dismiss(),
                    None => {}
                }
            }
        }

        Action::None
    }

    /// Area of a button from the last render
    /// Contact input area from the last render
    pub fn input_area(&self) -> Rect {
        self.input_area
    }

    pub fn button_area(&self, button: PopupButton) -> Rect {
        match button {
            PopupButton::Next => self.next_area,
            PopupButton::Close => self.close_area,
            PopupButton::CloseGlyph => self.close_glyph_area,
        }
    }

    fn button_at(&self, column: u16, row: u16) -> Option<PopupButton> {
        if LayoutManager::contains(self.next_area, column, row) {
            Some(PopupButton::Next)
        } else if LayoutManager::contains(self.close_area, column, row) {
            Some(PopupButton::Close)
        } else if LayoutManager::contains(self.close_glyph_area, column, row) {
            Some(PopupButton::CloseGlyph)
        } else {
            None
        }
    }

    fn focused_dropdown_open(&self) -> bool {
        match self.focus {
            PopupFocus::Materials => self.materials.is_open(),
            PopupFocus::Preferences => self.preferences.is_open(),
            _ => false,
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
            }
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_at_cursor(),
            KeyCode::Left => self.cursor_position = self.cursor_position.saturating_sub(1),
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.contact_info.chars().count());
            }
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.contact_info.chars().count(),
            KeyCode::Enter => {
                // Implicit form submission is suppressed; only the Next control submits
                log::debug!("Popup: Enter in contact input ignored");
            }
            _ => {}
        }
        Action::None
    }

    fn render_modal(&mut self, f: &mut Frame, area: Rect) {
        let modal = LayoutManager::centered_rect_lines(self.width_percent, POPUP_HEIGHT_LINES, area);
        f.render_widget(Clear, modal);

        let block = create_dialog_block(&self.title, FOCUS_COLOR).style(Style::default().bg(Color::Black));
        let inner = block.inner(modal);
        f.render_widget(block, modal);

        // Close glyph sits on the top border, right corner
        self.close_glyph_area = Rect::new(modal.right().saturating_sub(4), modal.y, 3, 1).intersection(modal);
        let glyph_style = if self.hovered_button == Some(PopupButton::CloseGlyph) {
            Style::default().fg(ERROR_COLOR).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        f.render_widget(
            Paragraph::new(Span::styled(format!(" {} ", CLOSE_GLYPH), glyph_style)),
            self.close_glyph_area,
        );

        let areas = LayoutManager::popup_areas(inner);

        f.render_widget(
            Paragraph::new(CONTACT_LABEL).style(Style::default().fg(Color::White)),
            areas.label,
        );

        self.input_area = areas.input;
        f.render_widget(
            create_input_paragraph(
                &self.contact_info,
                self.cursor_position,
                self.focus == PopupFocus::Contact,
                self.validation_error.is_some(),
            ),
            areas.input,
        );

        if let Some(message) = self.error_message() {
            f.render_widget(
                Paragraph::new(message).style(Style::default().fg(ERROR_COLOR)),
                areas.error,
            );
        }

        self.materials.render(f, areas.materials, &self.selected_materials);
        self.preferences.render(f, areas.preferences, &self.selected_preferences);

        let (next_area, close_area) = LayoutManager::button_row(
            areas.buttons,
            NEXT_BUTTON.len() as u16,
            CLOSE_BUTTON.len() as u16,
            4,
        );
        self.next_area = next_area;
        self.close_area = close_area;
        f.render_widget(
            create_button(
                NEXT_BUTTON,
                Color::Green,
                self.focus == PopupFocus::Next,
                self.hovered_button == Some(PopupButton::Next),
            ),
            next_area,
        );
        f.render_widget(
            create_button(
                CLOSE_BUTTON,
                Color::Gray,
                self.focus == PopupFocus::Close,
                self.hovered_button == Some(PopupButton::Close),
            ),
            close_area,
        );

        let instructions = [
            shortcuts::TAB_NEXT_FIELD,
            shortcuts::SEPARATOR,
            shortcuts::SPACE_TOGGLE,
            shortcuts::SEPARATOR,
            shortcuts::ENTER_CONFIRM,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CLOSE,
        ];
        f.render_widget(create_instructions_paragraph(&instructions), areas.instructions);
    }
}

impl Component for ContactPopup {
    fn mount(&mut self) {
        self.mounted = true;
        self.materials.mount();
        self.preferences.mount();
        log::info!("Popup: mounted");
    }

    fn unmount(&mut self) {
        self.materials.unmount();
        self.preferences.unmount();
        self.mounted = false;
        log::info!("Popup: unmounted");
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                return Action::None;
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.previous());
                return Action::None;
            }
            KeyCode::Esc if !self.focused_dropdown_open() => return self.dismiss(),
            _ => {}
        }

        match self.focus {
            PopupFocus::Contact => self.handle_contact_key(key),
            PopupFocus::Materials => {
                let action = self.materials.handle_key(key, &self.selected_materials);
                self.update(action)
            }
            PopupFocus::Preferences => {
                let action = self.preferences.handle_key(key, &self.selected_preferences);
                self.update(action)
            }
            PopupFocus::Next => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
                _ => Action::None,
            },
            PopupFocus::Close => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.dismiss(),
                _ => Action::None,
            },
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        self.handle_mouse_at(mouse, Instant::now())
    }

    fn on_tick(&mut self, now: Instant) -> bool {
        let materials_closed = self.materials.on_tick(now);
        let preferences_closed = self.preferences.on_tick(now);
        materials_closed || preferences_closed
    }

    /// Apply selection setters; everything else goes to the host
    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SetSelection { target, values } => {
                match target {
                    SelectionTarget::Materials => self.selected_materials = values,
                    SelectionTarget::Preferences => self.selected_preferences = values,
                }
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        // Full-viewport overlay, then the modal, then open lists above both
        f.render_widget(Clear, rect);
        f.render_widget(
            Block::default().style(Style::default().bg(OVERLAY_COLOR).add_modifier(Modifier::DIM)),
            rect,
        );

        self.render_modal(f, rect);

        self.materials.render_list(f, &self.selected_materials);
        self.preferences.render_list(f, &self.selected_preferences);
    }
}
