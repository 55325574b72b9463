//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Areas of the popup body, top to bottom
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopupAreas {
    pub label: Rect,
    pub input: Rect,
    pub error: Rect,
    pub materials: Rect,
    pub preferences: Rect,
    pub buttons: Rect,
    pub instructions: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let percent_x = percent_x.min(100);
        let margin = (100 - percent_x) / 2;
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines.min(r.height)),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(margin),
                Constraint::Percentage(percent_x),
                Constraint::Percentage(margin),
            ])
            .split(popup_layout[1])[1]
    }

    /// Split the popup's inner area into its rows
    #[must_use]
    pub fn popup_areas(inner: Rect) -> PopupAreas {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // label
                Constraint::Length(3), // input
                Constraint::Length(1), // error
                Constraint::Length(1),
                Constraint::Length(3), // materials
                Constraint::Length(1),
                Constraint::Length(3), // preferences
                Constraint::Length(1),
                Constraint::Length(1), // buttons
                Constraint::Length(1), // instructions
                Constraint::Min(0),
            ])
            .split(inner);

        PopupAreas {
            label: rows[0],
            input: rows[1],
            error: rows[2],
            materials: rows[4],
            preferences: rows[6],
            buttons: rows[8],
            instructions: rows[9],
        }
    }

    /// Center two buttons on a row with a gap between them
    #[must_use]
    pub fn button_row(area: Rect, first_width: u16, second_width: u16, gap: u16) -> (Rect, Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(first_width),
                Constraint::Length(gap),
                Constraint::Length(second_width),
                Constraint::Min(0),
            ])
            .split(area);
        (columns[1], columns[3])
    }

    /// Place an expandable list under its anchor, or above it if it does not fit.
    ///
    /// The list takes the side with more room when neither fits and is cut to
    /// that room, so it never covers the anchor. The result is clipped to `bounds`.
    #[must_use]
    pub fn dropdown_list_rect(anchor: Rect, rows: u16, bounds: Rect) -> Rect {
        let wanted = rows.saturating_add(2);
        let room_below = bounds.bottom().saturating_sub(anchor.bottom());
        let room_above = anchor.y.saturating_sub(bounds.y);

        let (y, height) = if wanted <= room_below || room_below >= room_above {
            (anchor.bottom(), wanted.min(room_below))
        } else {
            let height = wanted.min(room_above);
            (anchor.y - height, height)
        };
        Rect::new(anchor.x, y, anchor.width, height).intersection(bounds)
    }

    /// Check whether a terminal cell lies within an area
    #[must_use]
    pub fn contains(area: Rect, column: u16, row: u16) -> bool {
        area.contains(Position::new(column, row))
    }
}
