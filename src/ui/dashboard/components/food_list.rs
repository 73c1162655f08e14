//! Dashboard food list component
//!
//! One row per dish: name, price, availability and description

use super::super::state::DashboardState;
use crate::food::FoodItem;
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};

/// Render the menu as a selectable list.
pub fn render_food_list(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title(format!("MENU ({})", state.foods.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightRed));

    if state.foods.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No dishes yet. Press [A] to add one.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state.foods.iter().map(food_row).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(40, 44, 52))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn food_row(food: &FoodItem) -> ListItem<'static> {
    let (badge, badge_color) = if food.available {
        ("AVAILABLE", Color::Green)
    } else {
        ("UNAVAILABLE", Color::Red)
    };
    let name_style = if food.available {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD | Modifier::CROSSED_OUT)
    };

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(food.name.clone(), name_style),
            Span::raw("  "),
            Span::styled(format!("${}", food.price), Style::default().fg(Color::Yellow)),
            Span::raw("  "),
            Span::styled(format!("[{}]", badge), Style::default().fg(badge_color)),
        ]),
        Line::from(Span::styled(
            format!("  {}", food.description),
            Style::default().fg(Color::Gray),
        )),
    ])
}
