//! Endpoint paths and request/response types for the storefront API.

use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint Paths
// ============================================================================

pub mod paths {
    /// POST: authenticate, returns a bearer token.
    pub const LOGIN: &str = "/users/login";

    /// POST: create a new account.
    pub const REGISTER: &str = "/users/register";

    /// GET/PUT: the authenticated user's profile.
    pub const ME: &str = "/users/me";

    /// GET/POST: task collection.
    pub const TASKS: &str = "/tasks";

    /// PUT/DELETE: a single task.
    pub fn task(id: u64) -> String {
        format!("/tasks/{}", id)
    }

    /// GET/POST: product collection.
    pub const PRODUCTS: &str = "/products/";

    /// GET/PUT/DELETE: a single product.
    pub fn product(id: &str) -> String {
        format!("/products/{}", id)
    }

    /// GET: the authenticated user's orders.
    pub const ORDERS: &str = "/orders/";

    /// GET: a single order with its items.
    pub fn order(id: &str) -> String {
        format!("/orders/{}", id)
    }

    /// PUT: cancel a pending order.
    pub fn order_cancel(id: &str) -> String {
        format!("/orders/{}/cancel", id)
    }
}

// ============================================================================
// Authentication
// ============================================================================

/// Request body for login.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response from a successful login.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Request body for account registration.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

// ============================================================================
// Users
// ============================================================================

/// The authenticated user's profile, as returned by `/users/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Request body for a profile update.
#[derive(Debug, Serialize)]
pub struct UpdateProfileRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
}

// ============================================================================
// Tasks
// ============================================================================

/// A task record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

/// A task to be created or updated.
#[derive(Debug, Clone, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl TaskDraft {
    /// The title is the one required form field.
    pub fn validate(&self) -> Result<(), crate::error::ValidationError> {
        if self.title.is_empty() {
            return Err(crate::error::ValidationError::MissingField { field: "title" });
        }
        Ok(())
    }
}

// ============================================================================
// Products
// ============================================================================

/// A product record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub stock: i64,
    #[serde(default)]
    pub category_id: Option<String>,
}

/// A product to be created or updated.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

// ============================================================================
// Orders
// ============================================================================

/// An order summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub status: String,
    pub total_amount: f64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// A line item within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_item_id: String,
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_resource_paths() {
        assert_eq!(paths::task(3), "/tasks/3");
        assert_eq!(paths::product("p-1"), "/products/p-1");
        assert_eq!(paths::order("o-1"), "/orders/o-1");
        assert_eq!(paths::order_cancel("o-1"), "/orders/o-1/cancel");
    }

    #[test]
    fn task_defaults_tolerate_sparse_bodies() {
        let task: Task = serde_json::from_str(r#"{"id":1,"title":"milk"}"#).unwrap();
        assert_eq!(task.description, "");
        assert!(!task.completed);
    }

    #[test]
    fn task_draft_requires_title() {
        let draft = TaskDraft {
            title: String::new(),
            description: "whatever".to_string(),
            completed: false,
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn order_without_items_parses() {
        let order: Order = serde_json::from_str(
            r#"{"order_id":"o-1","status":"Pending","total_amount":9.5}"#,
        )
        .unwrap();
        assert!(order.items.is_empty());
    }
}
