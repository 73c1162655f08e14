//! Menu API Client
//!
//! A JSON client for the restaurant backend's `/foods` resource.

use crate::api::FoodApi;
use crate::api::error::ApiError;
use crate::food::{FoodItem, NewFood};
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("restaurant-dashboard/", env!("CARGO_PKG_VERSION"));

const FOODS_ENDPOINT: &str = "foods";

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(10))
                .user_agent(USER_AGENT)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn food_url(&self, id: u64) -> String {
        self.build_url(&format!("{}/{}", FOODS_ENDPOINT, id))
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn get_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self.client.get(url).send().await?;
        Self::read_json(response).await
    }

    async fn post_request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.client.post(url).json(body).send().await?;
        Self::read_json(response).await
    }

    async fn put_request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.client.put(url).json(body).send().await?;
        Self::read_json(response).await
    }

    async fn delete_request_no_response(&self, url: &str) -> Result<(), ApiError> {
        let response = self.client.delete(url).send().await?;
        Self::handle_response_status(response).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl FoodApi for ApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_foods(&self) -> Result<Vec<FoodItem>, ApiError> {
        self.get_request(&self.build_url(FOODS_ENDPOINT)).await
    }

    async fn create_food(&self, food: &NewFood) -> Result<FoodItem, ApiError> {
        self.post_request(&self.build_url(FOODS_ENDPOINT), food).await
    }

    async fn update_food(&self, food: &FoodItem) -> Result<FoodItem, ApiError> {
        self.put_request(&self.food_url(food.id), food).await
    }

    async fn delete_food(&self, id: u64) -> Result<(), ApiError> {
        self.delete_request_no_response(&self.food_url(id)).await
    }
}
