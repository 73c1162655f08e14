//! Dish form shared by the add and edit modals.

use crate::food::{FoodInput, FoodItem};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const FIELD_LABELS: [&str; 4] = ["Name", "Image URL", "Price", "Description"];

const NAME: usize = 0;
const IMAGE: usize = 1;
const PRICE: usize = 2;
const DESCRIPTION: usize = 3;

/// What the modal should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Keep editing
    None,
    /// Input passed validation
    Submit(FoodInput),
    /// Close the modal without sending anything
    Cancel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodForm {
    fields: [String; 4],
    focus: usize,
    /// Inline message from the last rejected submit
    pub error: Option<String>,
}

impl FoodForm {
    /// Empty form for the add modal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form prefilled from the dish being edited.
    pub fn for_food(food: &FoodItem) -> Self {
        let input = food.to_input();
        Self {
            fields: [input.name, input.image, input.price, input.description],
            focus: NAME,
            error: None,
        }
    }

    pub fn fields(&self) -> &[String; 4] {
        &self.fields
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn input(&self) -> FoodInput {
        FoodInput {
            name: self.fields[NAME].clone(),
            image: self.fields[IMAGE].clone(),
            price: self.fields[PRICE].clone(),
            description: self.fields[DESCRIPTION].clone(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Enter => return self.submit(),
            KeyCode::Tab | KeyCode::Down => self.focus = (self.focus + 1) % self.fields.len(),
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + self.fields.len() - 1) % self.fields.len()
            }
            KeyCode::Backspace => {
                self.fields[self.focus].pop();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.fields[self.focus].push(c);
                self.error = None;
            }
            _ => {}
        }
        FormAction::None
    }

    fn submit(&mut self) -> FormAction {
        let input = self.input().trimmed();
        match input.validate() {
            Ok(()) => {
                self.error = None;
                FormAction::Submit(input)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                FormAction::None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(form: &mut FoodForm, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_fills_focused_field_and_tab_moves_on() {
        let mut form = FoodForm::new();
        type_str(&mut form, "Pasta");
        form.handle_key(key(KeyCode::Tab));
        type_str(&mut form, "y");
        form.handle_key(key(KeyCode::Tab));
        type_str(&mut form, "8.00");
        form.handle_key(key(KeyCode::Tab));
        type_str(&mut form, "e");

        assert_eq!(form.input(), FoodInput::new("Pasta", "y", "8.00", "e"));
        assert_eq!(
            form.handle_key(key(KeyCode::Enter)),
            FormAction::Submit(FoodInput::new("Pasta", "y", "8.00", "e"))
        );
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut form = FoodForm::new();
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focus(), DESCRIPTION);
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus(), NAME);
    }

    #[test]
    fn test_invalid_submit_keeps_form_open_with_error() {
        let mut form = FoodForm::new();
        type_str(&mut form, "Soup");
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormAction::None);
        assert_eq!(form.error.as_deref(), Some("price is required"));

        // Typing clears the message.
        type_str(&mut form, "x");
        assert!(form.error.is_none());
    }

    #[test]
    fn test_backspace_and_escape() {
        let mut form = FoodForm::new();
        type_str(&mut form, "ab");
        form.handle_key(key(KeyCode::Backspace));
        assert_eq!(form.fields()[NAME], "a");
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormAction::Cancel);
    }

    #[test]
    fn test_for_food_prefills_fields() {
        let food = FoodItem {
            id: 4,
            name: "Soup".to_string(),
            image: "s.png".to_string(),
            price: "5.00".to_string(),
            description: "hot".to_string(),
            available: false,
        };
        let form = FoodForm::for_food(&food);
        assert_eq!(form.input(), food.to_input());
    }
}
