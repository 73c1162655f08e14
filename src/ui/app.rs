//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::api::FoodApi;
use crate::consts::cli_consts::ui::{poll_interval, splash_duration};
use crate::ui::dashboard::{Dashboard, DashboardState, render_dashboard};
use crate::ui::form::{FoodForm, FormAction};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Instant;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
}

impl UIConfig {
    pub fn new(with_background_color: bool) -> Self {
        Self {
            with_background_color,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// The menu dashboard.
    Dashboard,
}

/// Application state
pub struct App {
    /// When the splash screen was first shown.
    start_time: Instant,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Menu view-model.
    dashboard: Dashboard,

    /// Form behind the add modal.
    add_form: FoodForm,

    /// Form behind the edit modal.
    edit_form: FoodForm,

    should_quit: bool,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(api: Arc<dyn FoodApi>, ui_config: UIConfig) -> Self {
        let state = DashboardState::new(
            api.base_url().to_string(),
            ui_config.with_background_color,
        );
        Self {
            start_time: Instant::now(),
            current_screen: Screen::Splash,
            dashboard: Dashboard::new(api, state),
            add_form: FoodForm::new(),
            edit_form: FoodForm::new(),
            should_quit: false,
        }
    }

    /// Show the dashboard; the menu is loaded the first time.
    fn enter_dashboard(&mut self) {
        self.current_screen = Screen::Dashboard;
        self.dashboard.mount();
    }

    /// Route a key press to the splash screen, an open modal, or the list.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.current_screen {
            Screen::Splash => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    self.should_quit = true;
                } else {
                    self.enter_dashboard();
                }
            }
            Screen::Dashboard => self.handle_dashboard_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        // Edit modal renders on top, so it gets input first
        if self.dashboard.state.edit_modal_open {
            match self.edit_form.handle_key(key) {
                FormAction::Submit(input) => match self.dashboard.handle_update_food(input) {
                    Ok(()) => self.dashboard.toggle_edit_modal(),
                    Err(e) => self.edit_form.error = Some(e.to_string()),
                },
                FormAction::Cancel => self.dashboard.toggle_edit_modal(),
                FormAction::None => {}
            }
            return;
        }

        if self.dashboard.state.modal_open {
            match self.add_form.handle_key(key) {
                FormAction::Submit(input) => {
                    self.dashboard.handle_add_food(input);
                    self.dashboard.toggle_modal();
                }
                FormAction::Cancel => self.dashboard.toggle_modal(),
                FormAction::None => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('a') => {
                self.add_form = FoodForm::new();
                self.dashboard.toggle_modal();
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(food) = self.dashboard.state.selected_food().cloned() {
                    self.edit_form = FoodForm::for_food(&food);
                    self.dashboard.handle_edit_food(food);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.dashboard.state.selected_food().map(|food| food.id) {
                    self.dashboard.handle_delete_food(id);
                }
            }
            KeyCode::Char(' ') => {
                if let Some(food) = self.dashboard.state.selected_food().cloned() {
                    self.dashboard.handle_toggle_available(&food);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.dashboard.state.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.dashboard.state.select_prev(),
            KeyCode::Char('r') => self.dashboard.reload(),
            _ => {}
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        // Reconcile whatever requests finished since the last frame
        app.dashboard.drain();
        if app.current_screen == Screen::Dashboard {
            app.dashboard.state.update();
        }

        terminal.draw(|f| render(f, &app))?;

        if app.current_screen == Screen::Splash && app.start_time.elapsed() >= splash_duration() {
            app.enter_dashboard();
            continue;
        }

        if event::poll(poll_interval())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(
            f,
            &app.dashboard.state,
            &app.add_form,
            &app.edit_form,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockFoodApi;
    use crate::food::FoodItem;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn pizza() -> FoodItem {
        FoodItem {
            id: 1,
            name: "Pizza".to_string(),
            image: "x".to_string(),
            price: "10.00".to_string(),
            description: "d".to_string(),
            available: true,
        }
    }

    fn mock_api() -> MockFoodApi {
        let mut api = MockFoodApi::new();
        api.expect_base_url()
            .return_const("http://localhost:3333".to_string());
        api.expect_list_foods().returning(|| Ok(vec![pizza()]));
        api
    }

    /// App on the dashboard screen with the initial load applied.
    async fn loaded_app(api: MockFoodApi) -> App {
        let mut app = App::new(Arc::new(api), UIConfig::new(false));
        app.handle_key(key(KeyCode::Enter));
        app.dashboard.settle().await;
        app
    }

    #[tokio::test]
    async fn test_any_key_leaves_splash_and_loads_menu() {
        let app = loaded_app(mock_api()).await;
        assert_eq!(app.current_screen, Screen::Dashboard);
        assert_eq!(app.dashboard.state.foods, vec![pizza()]);
        assert_eq!(app.dashboard.state.api_url, "http://localhost:3333");
    }

    #[tokio::test]
    async fn test_add_modal_submits_and_closes() {
        let mut api = mock_api();
        api.expect_create_food()
            .withf(|body| body.name == "Pasta" && body.available)
            .times(1)
            .returning(|body| {
                Ok(FoodItem {
                    id: 2,
                    name: body.name.clone(),
                    image: body.image.clone(),
                    price: body.price.clone(),
                    description: body.description.clone(),
                    available: true,
                })
            });
        let mut app = loaded_app(api).await;

        app.handle_key(key(KeyCode::Char('a')));
        assert!(app.dashboard.state.modal_open);

        type_str(&mut app, "Pasta");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Tab));
        type_str(&mut app, "8.00");
        app.handle_key(key(KeyCode::Enter));

        assert!(!app.dashboard.state.modal_open);
        app.dashboard.settle().await;
        assert_eq!(app.dashboard.state.foods.len(), 2);
        assert_eq!(app.dashboard.state.foods[1].name, "Pasta");
    }

    #[tokio::test]
    async fn test_quit_key_is_text_inside_modal() {
        let mut app = loaded_app(mock_api()).await;
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.dashboard.state.modal_open);
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_edit_prefills_and_updates_selected() {
        let mut api = mock_api();
        api.expect_update_food()
            .withf(|body| body.id == 1 && body.name == "Pizza!")
            .times(1)
            .returning(|body| Ok(body.clone()));
        let mut app = loaded_app(api).await;

        app.handle_key(key(KeyCode::Char('e')));
        assert!(app.dashboard.state.edit_modal_open);
        assert_eq!(app.dashboard.state.editing_food, Some(pizza()));

        type_str(&mut app, "!");
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.dashboard.state.edit_modal_open);

        app.dashboard.settle().await;
        assert_eq!(app.dashboard.state.foods[0].name, "Pizza!");
    }

    #[tokio::test]
    async fn test_delete_and_availability_keys() {
        let mut api = mock_api();
        api.expect_update_food()
            .withf(|body| !body.available)
            .times(1)
            .returning(|body| Ok(body.clone()));
        api.expect_delete_food()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(()));
        let mut app = loaded_app(api).await;

        app.handle_key(key(KeyCode::Char(' ')));
        app.dashboard.settle().await;
        assert!(!app.dashboard.state.foods[0].available);

        app.handle_key(key(KeyCode::Char('d')));
        app.dashboard.settle().await;
        assert!(app.dashboard.state.foods.is_empty());
    }
}
