//! Headless mode execution
//!
//! One-shot menu commands that print to the console instead of opening the dashboard.

use crate::api::FoodApi;
use crate::food::{FoodInput, NewFood};
use crate::{print_cmd_info, print_cmd_success};
use std::error::Error;

/// Print every dish, in server order.
pub async fn list_menu(api: &dyn FoodApi) -> Result<usize, Box<dyn Error>> {
    let foods = api.list_foods().await?;
    print_cmd_info!("Menu", "{} dishes at {}", foods.len(), api.base_url());
    for food in &foods {
        println!("  {}", food);
    }
    Ok(foods.len())
}

/// Validate and create a dish, returning the id the server assigned.
pub async fn add_dish(api: &dyn FoodApi, input: FoodInput) -> Result<u64, Box<dyn Error>> {
    let input = input.trimmed();
    input.validate()?;
    let created = api.create_food(&NewFood::from(input)).await?;
    print_cmd_success!("Dish added", "{}", created);
    Ok(created.id)
}

pub async fn delete_dish(api: &dyn FoodApi, id: u64) -> Result<(), Box<dyn Error>> {
    api.delete_food(id).await?;
    print_cmd_success!("Dish removed", "#{}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockFoodApi;
    use crate::api::error::ApiError;
    use crate::food::FoodItem;

    fn mock_api() -> MockFoodApi {
        let mut api = MockFoodApi::new();
        api.expect_base_url()
            .return_const("http://localhost:3333".to_string());
        api
    }

    #[tokio::test]
    async fn test_list_menu_counts_dishes() {
        let mut api = mock_api();
        api.expect_list_foods().returning(|| {
            Ok(vec![FoodItem {
                id: 1,
                name: "Pizza".to_string(),
                image: "x".to_string(),
                price: "10.00".to_string(),
                description: "d".to_string(),
                available: true,
            }])
        });
        assert_eq!(list_menu(&api).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_add_dish_rejects_invalid_input_without_calling_api() {
        let mut api = mock_api();
        api.expect_create_food().times(0);
        let result = add_dish(&api, FoodInput::new("Soup", "", "free", "")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_add_dish_trims_and_returns_id() {
        let mut api = mock_api();
        api.expect_create_food()
            .withf(|body| body.name == "Soup" && body.price == "4.50" && body.available)
            .returning(|body| {
                Ok(FoodItem {
                    id: 42,
                    name: body.name.clone(),
                    image: body.image.clone(),
                    price: body.price.clone(),
                    description: body.description.clone(),
                    available: body.available,
                })
            });
        let id = add_dish(&api, FoodInput::new(" Soup ", "", "4.50 ", "hot"))
            .await
            .unwrap();
        assert_eq!(id, 42);
    }

    #[tokio::test]
    async fn test_delete_dish_propagates_errors() {
        let mut api = mock_api();
        api.expect_delete_food().returning(|_| {
            Err(ApiError::Http {
                status: 404,
                message: "Not Found".to_string(),
            })
        });
        let err = delete_dish(&api, 9).await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }
}
