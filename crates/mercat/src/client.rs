//! Authenticated HTTP client for the storefront API.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use crate::api::{
    LoginRequest, LoginResponse, Order, Product, ProductDraft, RegisterRequest, Task, TaskDraft,
    UpdateProfileRequest, UserProfile, paths,
};
use crate::auth::{AuthToken, Credentials, Session};
use crate::error::{Error, HttpError, ValidationError};
use crate::types::ApiUrl;

/// HTTP client that centralizes credential handling for every outbound call.
///
/// Callers never attach authorization headers themselves: each dispatch reads
/// the [`Session`]'s token at send time and, when present, adds
/// `Authorization: Bearer <token>`. Requests sent while logged out carry no
/// authorization header at all.
///
/// Responses with a non-2xx status surface as [`HttpError`] with the status
/// and raw body; transport failures surface as `Error::Network`. Nothing is
/// retried automatically.
///
/// # Cancellation
///
/// A logout does not cancel requests already in flight; they complete (or
/// fail) with the token they were dispatched with. Dropping a response
/// future aborts its request, which ties cancellation to the caller's
/// lifetime.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: ApiUrl,
    session: Session,
}

impl ApiClient {
    /// Create a new client for the given API base address and session.
    pub fn new(base: ApiUrl, session: Session) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("mercat/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base,
            session,
        }
    }

    /// Returns the base URL this client is configured for.
    pub fn base(&self) -> &ApiUrl {
        &self.base
    }

    /// Returns the session this client reads its credential from.
    pub fn session(&self) -> &Session {
        &self.session
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Authenticate and store the returned token in the session.
    ///
    /// The role is taken from the token's `role` claim when the server issues
    /// a JWT. A failed login leaves any existing session untouched.
    #[instrument(skip(self, credentials), fields(username = %credentials.username()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<(), Error> {
        credentials.validate()?;

        let request = LoginRequest {
            username: credentials.username(),
            password: credentials.password(),
        };

        let response: LoginResponse = self.post(paths::LOGIN, &request).await?;

        let token = AuthToken::new(response.token);
        let role = token.role_claim();
        self.session.login(token, role)?;

        debug!("login succeeded");
        Ok(())
    }

    /// Create a new account. Does not log in.
    #[instrument(skip(self, password))]
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<(), Error> {
        let request = RegisterRequest {
            username,
            email,
            password,
        };
        self.post_no_response(paths::REGISTER, &request).await
    }

    // ========================================================================
    // Users
    // ========================================================================

    /// Fetch the authenticated user's profile.
    pub async fn me(&self) -> Result<UserProfile, Error> {
        self.get(paths::ME).await
    }

    /// Update the authenticated user's profile.
    pub async fn update_profile(&self, username: &str, email: &str) -> Result<UserProfile, Error> {
        let request = UpdateProfileRequest { username, email };
        self.put(paths::ME, &request).await
    }

    // ========================================================================
    // Tasks
    // ========================================================================

    /// List all tasks.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, Error> {
        self.get(paths::TASKS).await
    }

    /// Create a new task. Rejects an empty title before dispatching.
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task, Error> {
        draft.validate()?;
        self.post(paths::TASKS, draft).await
    }

    /// Replace a task. Rejects an empty title before dispatching.
    pub async fn update_task(&self, id: u64, draft: &TaskDraft) -> Result<Task, Error> {
        draft.validate()?;
        self.put(&paths::task(id), draft).await
    }

    /// Delete a task.
    pub async fn delete_task(&self, id: u64) -> Result<(), Error> {
        self.delete(&paths::task(id)).await
    }

    // ========================================================================
    // Products
    // ========================================================================

    /// List all products.
    pub async fn list_products(&self) -> Result<Vec<Product>, Error> {
        self.get(paths::PRODUCTS).await
    }

    /// Fetch a single product.
    pub async fn get_product(&self, id: &str) -> Result<Product, Error> {
        self.get(&paths::product(id)).await
    }

    /// Create a product (admin only, server-enforced).
    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, Error> {
        self.post(paths::PRODUCTS, draft).await
    }

    /// Update a product (admin only, server-enforced).
    pub async fn update_product(&self, id: &str, draft: &ProductDraft) -> Result<Product, Error> {
        self.put(&paths::product(id), draft).await
    }

    /// Delete a product (admin only, server-enforced).
    pub async fn delete_product(&self, id: &str) -> Result<(), Error> {
        self.delete(&paths::product(id)).await
    }

    // ========================================================================
    // Orders
    // ========================================================================

    /// List the authenticated user's orders.
    pub async fn list_orders(&self) -> Result<Vec<Order>, Error> {
        self.get(paths::ORDERS).await
    }

    /// Fetch a single order with its items.
    pub async fn get_order(&self, id: &str) -> Result<Order, Error> {
        self.get(&paths::order(id)).await
    }

    /// Cancel a pending order.
    pub async fn cancel_order(&self, id: &str) -> Result<(), Error> {
        self.put_no_response_no_body(&paths::order_cancel(id)).await
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, Error> {
        let url = self.base.endpoint(path);
        debug!(path, "GET");

        let response = self
            .http
            .get(&url)
            .headers(self.request_headers()?)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(path);
        debug!(path, "POST");

        let response = self
            .http
            .post(&url)
            .headers(self.request_headers()?)
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn post_no_response<B: Serialize>(&self, path: &str, body: &B) -> Result<(), Error> {
        let url = self.base.endpoint(path);
        debug!(path, "POST (no response)");

        let response = self
            .http
            .post(&url)
            .headers(self.request_headers()?)
            .json(body)
            .send()
            .await?;

        self.check_status(response).await
    }

    async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint(path);
        debug!(path, "PUT");

        let response = self
            .http
            .put(&url)
            .headers(self.request_headers()?)
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn put_no_response_no_body(&self, path: &str) -> Result<(), Error> {
        let url = self.base.endpoint(path);
        debug!(path, "PUT (no body)");

        let response = self
            .http
            .put(&url)
            .headers(self.request_headers()?)
            .send()
            .await?;

        self.check_status(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.base.endpoint(path);
        debug!(path, "DELETE");

        let response = self
            .http
            .delete(&url)
            .headers(self.request_headers()?)
            .send()
            .await?;

        self.check_status(response).await
    }

    /// Build headers for a request, reading the session's token at dispatch
    /// time so a login or logout between two calls is always reflected in
    /// the next request.
    ///
    /// A token that cannot be sent as a header value (a tampered session
    /// file can smuggle in control characters) fails the dispatch instead
    /// of panicking.
    fn request_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.token() {
            let auth_value = format!("Bearer {}", token.as_str());
            let auth_value =
                HeaderValue::from_str(&auth_value).map_err(|_| ValidationError::InvalidToken)?;
            headers.insert(AUTHORIZATION, auth_value);
        }

        Ok(headers)
    }

    /// Handle a response, parsing the JSON body or surfacing the error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            let body = response.json::<R>().await?;
            Ok(body)
        } else {
            Err(Error::Http(Self::read_error(response).await))
        }
    }

    /// Handle a response whose body the caller does not need.
    async fn check_status(&self, response: reqwest::Response) -> Result<(), Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Http(Self::read_error(response).await))
        }
    }

    /// Capture a non-2xx response as an [`HttpError`].
    async fn read_error(response: reqwest::Response) -> HttpError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        HttpError::new(status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let base = ApiUrl::new("https://shop.example.com").unwrap();
        let client = ApiClient::new(base.clone(), Session::in_memory());
        assert_eq!(client.base().as_str(), base.as_str());
    }
}
