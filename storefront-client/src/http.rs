//! HTTP client for the storefront API

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::{
    Category, CategoryCreate, CategoryUpdate, CreateOrderRequest, FoodItem, FoodItemCreate,
    FoodItemQuery, FoodItemUpdate, LoginRequest, LoginResponse, Order,
};

use crate::{ClientConfig, ClientError, ClientResult};

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    async fn send<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, &url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send::<T, ()>(Method::GET, path, None).await
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            return serde_json::from_str(&text).map_err(Into::into);
        }

        match serde_json::from_str::<ApiResponse>(&text) {
            Ok(body) if body.code.is_some() => Err(ClientError::Api(body.into_app_error())),
            _ if status == StatusCode::UNAUTHORIZED => {
                Err(ClientError::Api(AppError::new(ErrorCode::NotAuthenticated)))
            }
            _ => Err(ClientError::InvalidResponse(format!("HTTP {status}: {text}"))),
        }
    }

    // ========== Health ==========

    pub async fn health(&self) -> ClientResult<serde_json::Value> {
        self.get("/health").await
    }

    // ========== Auth ==========

    /// Log in and keep the issued token for later admin calls
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self
            .send(Method::POST, "/api/auth/login", Some(&request))
            .await?;
        self.token = Some(response.token.clone());
        Ok(response)
    }

    pub fn logout(&mut self) {
        self.token = None;
    }

    // ========== Categories ==========

    pub async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.get("/api/categories").await
    }

    pub async fn create_category(&self, data: &CategoryCreate) -> ClientResult<Category> {
        self.send(Method::POST, "/api/categories", Some(data)).await
    }

    pub async fn update_category(&self, id: i64, data: &CategoryUpdate) -> ClientResult<Category> {
        self.send(Method::PUT, &format!("/api/categories/{id}"), Some(data))
            .await
    }

    pub async fn delete_category(&self, id: i64) -> ClientResult<()> {
        let _: serde_json::Value = self
            .send::<_, ()>(Method::DELETE, &format!("/api/categories/{id}"), None)
            .await?;
        Ok(())
    }

    // ========== Food items ==========

    pub async fn list_food_items(&self, query: &FoodItemQuery) -> ClientResult<Vec<FoodItem>> {
        match query.category_id {
            Some(category_id) => {
                self.get(&format!("/api/food-items?category_id={category_id}"))
                    .await
            }
            None => self.get("/api/food-items").await,
        }
    }

    pub async fn get_food_item(&self, id: i64) -> ClientResult<FoodItem> {
        self.get(&format!("/api/food-items/{id}")).await
    }

    pub async fn create_food_item(&self, data: &FoodItemCreate) -> ClientResult<FoodItem> {
        self.send(Method::POST, "/api/food-items", Some(data)).await
    }

    pub async fn update_food_item(&self, id: i64, data: &FoodItemUpdate) -> ClientResult<FoodItem> {
        self.send(Method::PUT, &format!("/api/food-items/{id}"), Some(data))
            .await
    }

    pub async fn delete_food_item(&self, id: i64) -> ClientResult<()> {
        let _: serde_json::Value = self
            .send::<_, ()>(Method::DELETE, &format!("/api/food-items/{id}"), None)
            .await?;
        Ok(())
    }

    // ========== Orders ==========

    pub async fn place_order(&self, request: &CreateOrderRequest) -> ClientResult<Order> {
        self.send(Method::POST, "/api/orders", Some(request)).await
    }

    /// Admin only
    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.get("/api/orders").await
    }
}
