//! Dashboard footer component
//!
//! Renders the key bindings for whatever currently has input

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const LIST_KEYS: &str =
    "[A] Add | [E/Enter] Edit | [D] Delete | [Space] Availability | [R] Reload | [Q] Quit";
const FORM_KEYS: &str = "[Tab/Up/Down] Field | [Enter] Save | [Esc] Cancel";

/// Render footer; `modal_open` switches to the form bindings.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, modal_open: bool) {
    let footer_text = if modal_open { FORM_KEYS } else { LIST_KEYS };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
