//! Add and edit dish modals
//!
//! Both render the same form inside a centered popup.

use super::super::utils::centered_popup;
use crate::ui::form::{FIELD_LABELS, FoodForm};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const POPUP_WIDTH: u16 = 64;
const POPUP_HEIGHT: u16 = 14;

pub fn render_add_modal(f: &mut Frame, area: Rect, form: &FoodForm) {
    render_form_modal(f, area, " New dish ", Color::Green, form);
}

pub fn render_edit_modal(f: &mut Frame, area: Rect, form: &FoodForm, editing: Option<u64>) {
    let title = match editing {
        Some(id) => format!(" Edit dish #{} ", id),
        None => " Edit dish ".to_string(),
    };
    render_form_modal(f, area, &title, Color::Yellow, form);
}

fn render_form_modal(f: &mut Frame, area: Rect, title: &str, accent: Color, form: &FoodForm) {
    let popup_area = centered_popup(area, POPUP_WIDTH, POPUP_HEIGHT);
    f.render_widget(Clear, popup_area);

    let mut lines = vec![Line::from("")];
    for (index, (label, value)) in FIELD_LABELS.iter().zip(form.fields()).enumerate() {
        let focused = index == form.focus();
        let label_style = if focused {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if focused { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>12}: ", label), label_style),
            Span::styled(format!("{}{}", value, cursor), Style::default().fg(Color::White)),
        ]));
        lines.push(Line::from(""));
    }

    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(title.to_string())
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
    );
    f.render_widget(paragraph, popup_area);
}
