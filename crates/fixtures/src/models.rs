use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Role given to ordinary (non-admin) accounts.
pub const ROLE_USER: &str = "USER";

/// Email/password sign-in.
pub const PROVIDER_EMAIL: &str = "EMAIL";

pub const PLAN_BUSINESS: &str = "BUSINESS";

pub const STATUS_ACTIVE: &str = "active";

/// Business-tier allowances.
pub const BUSINESS_LINKS_LIMIT: i32 = 1_000;
pub const BUSINESS_CLICKS_LIMIT: i32 = 100_000;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password: String,
    pub verified: bool,
    pub role: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuthProvider {
    pub id: Uuid,
    pub user_id: Uuid,
    pub provider: String,
    pub provider_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan: String,
    pub status: String,
    pub start_date: OffsetDateTime,
    pub end_date: Option<OffsetDateTime>,
    pub next_billed_at: Option<OffsetDateTime>,
    pub scheduled_to_be_cancelled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Usage {
    pub id: Uuid,
    pub user_id: Uuid,
    pub links_count: i32,
    pub links_limit: i32,
    pub clicks_count: i32,
    pub clicks_limit: i32,
}

/// A user row together with every related row created alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedAccount {
    pub user: User,
    pub auth_providers: Vec<AuthProvider>,
    pub subscription: Subscription,
    pub usage: Usage,
}

/// What the operator needs to log in with the fixture account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub user_id: Uuid,
}
