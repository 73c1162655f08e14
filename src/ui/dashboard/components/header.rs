//! Dashboard header component
//!
//! Renders the title, the API being talked to, and the "new dish" hint

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Render header with title and connection summary.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("RESTAURANT DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let status = if state.pending_requests > 0 {
        Span::styled(
            format!(
                "{} {} request(s) in flight",
                SPINNER[state.tick % SPINNER.len()],
                state.pending_requests
            ),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::styled("idle", Style::default().fg(Color::DarkGray))
    };

    let summary = Line::from(vec![
        Span::styled("API ", Style::default().fg(Color::DarkGray)),
        Span::styled(state.api_url.clone(), Style::default().fg(Color::Cyan)),
        Span::raw("  |  "),
        Span::styled(
            format!("{} dishes", state.foods.len()),
            Style::default().fg(Color::White),
        ),
        Span::raw("  |  "),
        status,
        Span::raw("  |  "),
        Span::styled(
            "[A] New dish",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let summary = Paragraph::new(summary).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(summary, header_chunks[1]);
}
