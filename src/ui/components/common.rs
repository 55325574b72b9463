use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

pub const FOCUS_COLOR: Color = Color::Cyan;
pub const ERROR_COLOR: Color = Color::Red;
pub const IDLE_BORDER_COLOR: Color = Color::Gray;
pub const OVERLAY_COLOR: Color = Color::DarkGray;

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(theme_color))
}

/// Border color for an input-like field: error wins over focus
pub fn field_border_color(focused: bool, has_error: bool) -> Color {
    if has_error {
        ERROR_COLOR
    } else if focused {
        FOCUS_COLOR
    } else {
        IDLE_BORDER_COLOR
    }
}

/// Creates an input field with a visual cursor at `cursor` (a char index) when focused
pub fn create_input_paragraph<'a>(input: &str, cursor: usize, focused: bool, has_error: bool) -> Paragraph<'a> {
    let input_display = if focused {
        let split = input.char_indices().nth(cursor).map(|(i, _)| i).unwrap_or(input.len());
        let (before, after) = input.split_at(split);
        format!("{}█{}", before, after)
    } else {
        input.to_string()
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(field_border_color(focused, has_error)));

    Paragraph::new(input_display)
        .block(input_block)
        .style(Style::default().fg(Color::White))
}

/// Creates a one-line button; focus and hover are expressed purely through style
pub fn create_button<'a>(label: &'a str, color: Color, focused: bool, hovered: bool) -> Paragraph<'a> {
    let style = if focused {
        Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD)
    } else if hovered {
        Style::default().fg(color).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(color)
    };

    Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center)
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used by the popup
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CLOSE: InstructionShortcut = ("Esc", Color::Red, " Close");
    pub const TAB_NEXT_FIELD: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
    pub const SPACE_TOGGLE: InstructionShortcut = ("Space", Color::Yellow, " Toggle");
    pub const ENTER_CONFIRM: InstructionShortcut = ("Enter", Color::Green, " Confirm");
}
