//! Typed operations on the backend's `/users/` collection.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::error::Result;

/// A user record as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// Stable identifier.
    pub id: Uuid,
    /// Email address, the only required profile field.
    pub email: String,
    /// Optional handle.
    #[serde(default)]
    pub username: Option<String>,
    /// Optional display name.
    #[serde(default)]
    pub full_name: Option<String>,
    /// Identity-provider subject, when the account is linked.
    #[serde(default)]
    pub auth0_id: Option<String>,
    /// Whether the account is active.
    pub is_active: bool,
    /// Creation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Last-update timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Body for creating a user. Optional fields are left off the wire when
/// absent.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    /// Email address (required).
    pub email: String,
    /// Optional handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Optional display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Optional identity-provider subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth0_id: Option<String>,
}

impl CreateUserRequest {
    /// Create a request with just the required email.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            username: None,
            full_name: None,
            auth0_id: None,
        }
    }
}

/// Patch body for updating a user; every field is optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserRequest {
    /// New handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Activate or deactivate the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Response envelope for user creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// The created record.
    pub user: User,
}

/// Response envelope for listing users.
#[derive(Debug, Clone, Deserialize)]
pub struct ListUsersResponse {
    /// The requested page.
    pub users: Vec<User>,
    /// Total number of users in the collection.
    pub total: u64,
}

/// Pagination parameters for [`ApiClient::list_users`].
///
/// Backend defaults apply for absent fields: skip 0, limit 10.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListUsersQuery {
    /// Records to skip.
    pub skip: Option<u32>,
    /// Page size, capped at 100 by the backend.
    pub limit: Option<u32>,
}

impl ListUsersQuery {
    fn query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(skip) = self.skip {
            params.push(format!("skip={skip}"));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={limit}"));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

impl ApiClient {
    /// Create a user. POST `/users/`.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<CreateUserResponse> {
        self.post("/users/", Some(request)).await
    }

    /// List users with optional pagination. GET `/users/`.
    pub async fn list_users(&self, query: Option<ListUsersQuery>) -> Result<ListUsersResponse> {
        let path = match query {
            Some(query) => format!("/users/{}", query.query_string()),
            None => "/users/".to_string(),
        };
        self.get(&path).await
    }

    /// Fetch a user by id. GET `/users/{id}`.
    ///
    /// An unknown id surfaces as `ApiError::Http { status: 404 }`.
    pub async fn get_user(&self, id: Uuid) -> Result<User> {
        self.get(&format!("/users/{id}")).await
    }

    /// Update a user. PUT `/users/{id}`.
    pub async fn update_user(&self, id: Uuid, request: &UpdateUserRequest) -> Result<User> {
        self.put(&format!("/users/{id}"), Some(request)).await
    }
}
