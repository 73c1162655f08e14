pub mod headless_mode;
pub mod tui_mode;

pub use headless_mode::{add_dish, delete_dish, list_menu};
pub use tui_mode::run_tui_mode;
