use crate::api::error::ApiError;
use crate::food::{FoodItem, NewFood};

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait FoodApi: Send + Sync {
    /// Base URL every endpoint is resolved against.
    fn base_url(&self) -> &str;

    /// Fetch the whole menu, in server order.
    async fn list_foods(&self) -> Result<Vec<FoodItem>, ApiError>;

    /// Create a dish; the server assigns its `id`.
    async fn create_food(&self, food: &NewFood) -> Result<FoodItem, ApiError>;

    /// Replace the dish with `food.id`, returning the server's copy.
    async fn update_food(&self, food: &FoodItem) -> Result<FoodItem, ApiError>;

    /// Remove the dish with the given id.
    async fn delete_food(&self, id: u64) -> Result<(), ApiError>;
}
