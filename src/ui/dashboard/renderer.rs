//! Dashboard main renderer

use super::components::{food_list, footer, header, logs, modal};
use super::state::DashboardState;
use crate::ui::form::FoodForm;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

/// Render the dashboard: header, menu, activity log, footer, then any open modal.
pub fn render_dashboard(
    f: &mut Frame,
    state: &DashboardState,
    add_form: &FoodForm,
    edit_form: &FoodForm,
) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(24, 18, 18))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    food_list::render_food_list(f, main_chunks[1], state);
    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state.any_modal_open());

    // Edit modal draws last so it sits on top when both are open
    if state.modal_open {
        modal::render_add_modal(f, f.area(), add_form);
    }
    if state.edit_modal_open {
        let editing = state.editing_food.as_ref().map(|food| food.id);
        modal::render_edit_modal(f, f.area(), edit_form, editing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Event, Operation};
    use crate::food::FoodItem;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(state: &DashboardState, add: &FoodForm, edit: &FoodForm) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|f| render_dashboard(f, state, add, edit))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn pizza() -> FoodItem {
        FoodItem {
            id: 1,
            name: "Pizza".to_string(),
            image: "x".to_string(),
            price: "10.00".to_string(),
            description: "Cheesy".to_string(),
            available: true,
        }
    }

    #[test]
    fn test_renders_menu_rows() {
        let mut state = DashboardState::new("http://localhost:3333".to_string(), true);
        state.set_foods(vec![pizza()]);
        state.add_to_activity_log(Event::success(Operation::Load, "Loaded 1 dishes".to_string()));

        let text = screen_text(&state, &FoodForm::new(), &FoodForm::new());
        assert!(text.contains("Pizza"));
        assert!(text.contains("$10.00"));
        assert!(text.contains("AVAILABLE"));
        assert!(text.contains("http://localhost:3333"));
        assert!(text.contains("Loaded 1 dishes"));
    }

    #[test]
    fn test_renders_empty_menu_hint() {
        let state = DashboardState::new(String::new(), false);
        let text = screen_text(&state, &FoodForm::new(), &FoodForm::new());
        assert!(text.contains("No dishes yet"));
    }

    #[test]
    fn test_renders_open_modals() {
        let mut state = DashboardState::new(String::new(), false);
        state.toggle_modal();
        let text = screen_text(&state, &FoodForm::new(), &FoodForm::new());
        assert!(text.contains("Image URL"));
        assert!(text.contains("[Esc] Cancel"));

        state.toggle_modal();
        state.begin_edit(pizza());
        let text = screen_text(&state, &FoodForm::new(), &FoodForm::for_food(&pizza()));
        assert!(text.contains("Edit dish #1"));
        assert!(text.contains("Cheesy"));
    }
}
