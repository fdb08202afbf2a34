//! # Backend API Client
//!
//! The four calls the storefront makes, behind the [`StorefrontApi`] trait:
//!
//! | Call | Request | Success |
//! |------|---------|---------|
//! | [`authenticate`](StorefrontApi::authenticate) | `POST /auth/login` (form) | 200 `{access_token}` |
//! | [`register`](StorefrontApi::register) | `POST /auth/register` (JSON) | 201 |
//! | [`list_products`](StorefrontApi::list_products) | `GET /products` | 200 `[Product]` |
//! | [`place_order`](StorefrontApi::place_order) | `POST /orders` (JSON, bearer) | 201 `{id}` |
//!
//! Each call is one request: no retry, no timeout beyond the browser's.
//! [`HttpApi`] only moves bytes; what a status and body mean is decided by
//! the `*_result` functions so the rules can be tested without a browser.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use leptos::prelude::use_context;
use serde::de::DeserializeOwned;
use shared::dto::{
    ErrorResponse, OrderRequest, OrderResponse, Product, RegisterRequest, RegisterResponse,
    TokenResponse,
};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::utils::url::form_urlencode;

const LOGIN_PATH: &str = "/auth/login";
const REGISTER_PATH: &str = "/auth/register";
const PRODUCTS_PATH: &str = "/products";
const ORDERS_PATH: &str = "/orders";

/// Storefront backend operations.
///
/// `?Send`: futures run on the browser's single thread.
#[async_trait(?Send)]
pub trait StorefrontApi {
    /// Returns the access token.
    async fn authenticate(&self, username: &str, password: &str) -> Result<String, ApiError>;

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError>;

    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// The caller supplies the token; the client never looks one up.
    async fn place_order(
        &self,
        token: &str,
        order: &OrderRequest,
    ) -> Result<OrderResponse, ApiError>;
}

/// [`StorefrontApi`] over the browser's `fetch`.
#[derive(Debug, Clone, Default)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send a request and read its status and body.
    async fn exchange(
        &self,
        url: &str,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<(u16, String), ApiError> {
        let request = request.map_err(|e| {
            log::error!("Could not build request for {}: {}", url, e);
            ApiError::Malformed(e.to_string())
        })?;

        log::info!("Sending request to {}", url);

        let response: Response = request.send().await.map_err(|e| {
            log::error!("No response from {}: {}", url, e);
            ApiError::Unreachable
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            log::error!("Could not read response body from {}: {}", url, e);
            ApiError::Malformed(format!("Could not read the server response: {}", e))
        })?;

        if (200..300).contains(&status) {
            log::info!("{} -> {}", url, status);
        } else {
            log::warn!("{} -> {}", url, status);
        }
        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl StorefrontApi for HttpApi {
    async fn authenticate(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let url = self.config.endpoint(LOGIN_PATH);
        let request = Request::post(&url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(login_form_body(username, password));
        let (status, body) = self.exchange(&url, request).await?;
        login_result(status, &body)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let url = self.config.endpoint(REGISTER_PATH);
        let (status, body) = self.exchange(&url, Request::post(&url).json(request)).await?;
        register_result(status, &body)
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.config.endpoint(PRODUCTS_PATH);
        let (status, body) = self.exchange(&url, Request::get(&url).build()).await?;
        products_result(status, &body)
    }

    async fn place_order(
        &self,
        token: &str,
        order: &OrderRequest,
    ) -> Result<OrderResponse, ApiError> {
        let url = self.config.endpoint(ORDERS_PATH);
        let request = Request::post(&url)
            .header("Authorization", &format!("Bearer {}", token))
            .json(order);
        let (status, body) = self.exchange(&url, request).await?;
        order_result(status, &body)
    }
}

/// The API client provided by the app shell, or one built from the build-time config.
pub fn use_api() -> HttpApi {
    use_context::<HttpApi>().unwrap_or_default()
}

pub(crate) fn login_form_body(username: &str, password: &str) -> String {
    form_urlencode(&[("username", username), ("password", password)])
}

fn expect_status(status: u16, expected: u16, body: &str) -> Result<(), ApiError> {
    if status == expected {
        Ok(())
    } else {
        Err(ApiError::Rejected {
            status,
            detail: ErrorResponse::detail_from_body(body),
        })
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body)
        .map_err(|e| ApiError::Malformed(format!("Invalid response from server: {}", e)))
}

pub(crate) fn login_result(status: u16, body: &str) -> Result<String, ApiError> {
    expect_status(status, 200, body)?;
    let response: TokenResponse = parse_body(body)?;
    response
        .access_token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            ApiError::Malformed("Login failed. The response did not include a token.".to_string())
        })
}

pub(crate) fn register_result(status: u16, body: &str) -> Result<RegisterResponse, ApiError> {
    expect_status(status, 201, body)?;
    // The body is informational only.
    Ok(serde_json::from_str(body).unwrap_or_default())
}

pub(crate) fn products_result(status: u16, body: &str) -> Result<Vec<Product>, ApiError> {
    expect_status(status, 200, body)?;
    parse_body(body)
}

pub(crate) fn order_result(status: u16, body: &str) -> Result<OrderResponse, ApiError> {
    expect_status(status, 201, body)?;
    parse_body(body)
}

#[cfg(test)]
pub(crate) mod fake {
    //! Scripted [`StorefrontApi`] for host-side tests.

    use std::cell::RefCell;

    use super::*;

    pub(crate) struct FakeApi {
        pub login: Result<String, ApiError>,
        pub register: Result<RegisterResponse, ApiError>,
        pub products: Result<Vec<Product>, ApiError>,
        pub order: Result<OrderResponse, ApiError>,
        pub calls: RefCell<Vec<&'static str>>,
        pub orders: RefCell<Vec<(String, OrderRequest)>>,
    }

    impl Default for FakeApi {
        fn default() -> Self {
            Self {
                login: Err(ApiError::Unreachable),
                register: Err(ApiError::Unreachable),
                products: Err(ApiError::Unreachable),
                order: Err(ApiError::Unreachable),
                calls: RefCell::new(Vec::new()),
                orders: RefCell::new(Vec::new()),
            }
        }
    }

    impl FakeApi {
        pub(crate) fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl StorefrontApi for FakeApi {
        async fn authenticate(&self, _username: &str, _password: &str) -> Result<String, ApiError> {
            self.calls.borrow_mut().push("authenticate");
            self.login.clone()
        }

        async fn register(&self, _request: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
            self.calls.borrow_mut().push("register");
            self.register.clone()
        }

        async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
            self.calls.borrow_mut().push("list_products");
            self.products.clone()
        }

        async fn place_order(
            &self,
            token: &str,
            order: &OrderRequest,
        ) -> Result<OrderResponse, ApiError> {
            self.calls.borrow_mut().push("place_order");
            self.orders
                .borrow_mut()
                .push((token.to_string(), order.clone()));
            self.order.clone()
        }
    }
}
