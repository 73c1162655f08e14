//! Menu Food Items
//!
//! This abstracts over the shapes a dish takes on its way to and from the API:
//! * FoodItem (returned by every endpoint, sent back on update)
//! * FoodInput (what the add/edit forms collect)
//! * NewFood (the create request body).

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Server-assigned identifier, unique within the menu
    pub id: u64,

    /// Dish name
    pub name: String,

    /// Image URL
    pub image: String,

    /// Decimal-formatted price, kept as the server sent it
    pub price: String,

    pub description: String,

    /// Whether the dish can currently be ordered
    pub available: bool,
}

impl FoodItem {
    /// Builds the update body for `editing`, keeping its `id` and `available`
    /// and taking every other field from `input`.
    pub fn merged(editing: &FoodItem, input: FoodInput) -> Self {
        FoodItem {
            id: editing.id,
            available: editing.available,
            name: input.name,
            image: input.image,
            price: input.price,
            description: input.description,
        }
    }

    /// Returns a copy with `available` replaced.
    pub fn with_availability(&self, available: bool) -> Self {
        FoodItem {
            available,
            ..self.clone()
        }
    }

    /// The editable fields of this item, used to prefill the edit form.
    pub fn to_input(&self) -> FoodInput {
        FoodInput {
            name: self.name.clone(),
            image: self.image.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
        }
    }
}

impl Display for FoodItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} (${}) [{}] - {}",
            self.id,
            self.name,
            self.price,
            if self.available {
                "available"
            } else {
                "unavailable"
            },
            self.description
        )
    }
}

/// A dish as entered in a form: a `FoodItem` without `id` and `available`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct FoodInput {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("price must be a non-negative decimal, got '{0}'")]
    InvalidPrice(String),
}

impl FoodInput {
    pub fn new(name: &str, image: &str, price: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            image: image.to_string(),
            price: price.to_string(),
            description: description.to_string(),
        }
    }

    /// Copy with surrounding whitespace stripped from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            image: self.image.trim().to_string(),
            price: self.price.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }

    /// Checks the fields a dish cannot be listed without.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Missing("name"));
        }
        let price = self.price.trim();
        if price.is_empty() {
            return Err(ValidationError::Missing("price"));
        }
        if is_plain_decimal(price) {
            Ok(())
        } else {
            Err(ValidationError::InvalidPrice(price.to_string()))
        }
    }
}

/// Digits, optionally followed by one `.` and more digits. No sign or exponent.
fn is_plain_decimal(price: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match price.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(price),
    }
}

/// Body of `POST /foods`. New dishes are always created available.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub image: String,
    pub price: String,
    pub description: String,
    pub available: bool,
}

impl From<FoodInput> for NewFood {
    fn from(input: FoodInput) -> Self {
        NewFood {
            name: input.name,
            image: input.image,
            price: input.price,
            description: input.description,
            available: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pizza() -> FoodItem {
        FoodItem {
            id: 1,
            name: "Pizza".to_string(),
            image: "x".to_string(),
            price: "10.00".to_string(),
            description: "d".to_string(),
            available: false,
        }
    }

    #[test]
    fn test_food_item_uses_wire_field_names() {
        let json = r#"{"id":1,"name":"Pizza","image":"x","price":"10.00","description":"d","available":false}"#;
        let food: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(food, pizza());
    }

    #[test]
    fn test_new_food_defaults_to_available() {
        let body = NewFood::from(FoodInput::new("Pasta", "y", "8.00", "e"));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["available"], serde_json::Value::Bool(true));
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_merged_keeps_id_and_availability() {
        let updated = FoodItem::merged(&pizza(), FoodInput::new("Calzone", "z", "12.50", "folded"));
        assert_eq!(updated.id, 1);
        assert!(!updated.available);
        assert_eq!(updated.name, "Calzone");
        assert_eq!(updated.price, "12.50");
    }

    #[test]
    fn test_with_availability_only_touches_flag() {
        let food = pizza();
        let toggled = food.with_availability(true);
        assert!(toggled.available);
        assert_eq!(toggled.with_availability(false), food);
    }

    #[test]
    fn test_validate_requires_name_and_price() {
        assert_eq!(
            FoodInput::new("  ", "x", "1", "").validate(),
            Err(ValidationError::Missing("name"))
        );
        assert_eq!(
            FoodInput::new("Soup", "x", "", "").validate(),
            Err(ValidationError::Missing("price"))
        );
        assert!(FoodInput::new("Soup", "", " 4.5 ", "").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_prices() {
        for price in [
            "abc", "-1", "NaN", "inf", "1e3", "-0", "+5", "5.", ".5", "1.2.3", "1 000",
        ] {
            let result = FoodInput::new("Soup", "", price, "").validate();
            assert!(
                matches!(result, Err(ValidationError::InvalidPrice(_))),
                "{price} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_accepts_plain_decimals() {
        for price in ["0", "8", "12.50", "007.0"] {
            assert!(
                FoodInput::new("Soup", "", price, "").validate().is_ok(),
                "{price} should be accepted"
            );
        }
    }

    #[test]
    fn test_trimmed_and_to_input() {
        let input = FoodInput::new(" Pizza ", " x", "10.00 ", " d ").trimmed();
        assert_eq!(input, pizza().to_input());
    }
}
