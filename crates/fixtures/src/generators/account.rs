//! Business-tier fixture account generation.

use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::auth::{BcryptError, hash_password};
use crate::config::DEFAULT_HASH_COST;
use crate::models::{
    BUSINESS_CLICKS_LIMIT, BUSINESS_LINKS_LIMIT, PLAN_BUSINESS, PROVIDER_EMAIL, ROLE_USER,
    STATUS_ACTIVE,
};

/// Plaintext password given to every fixture account.
pub const FIXTURE_PASSWORD: &str = "TestBusiness123!";

/// Display name given to every fixture account.
pub const FIXTURE_NAME: &str = "Business Test User";

const EMAIL_PREFIX: &str = "business-test";
const EMAIL_DOMAIN: &str = "example.com";

/// Time between subscription start and the next billing date.
pub const BILLING_PERIOD: Duration = Duration::days(30);

/// Generated account data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedAccount {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// Kept so it can be echoed to the operator. Never persisted.
    pub password: String,
    pub password_hash: String,
    pub verified: bool,
    pub role: &'static str,
    pub auth_provider: GeneratedAuthProvider,
    pub subscription: GeneratedSubscription,
    pub usage: GeneratedUsage,
}

#[derive(Debug, Clone)]
pub struct GeneratedAuthProvider {
    pub id: Uuid,
    pub provider: &'static str,
    pub provider_id: String,
}

#[derive(Debug, Clone)]
pub struct GeneratedSubscription {
    pub id: Uuid,
    pub plan: &'static str,
    pub status: &'static str,
    pub start_date: OffsetDateTime,
    /// `None` means open-ended.
    pub end_date: Option<OffsetDateTime>,
    pub next_billed_at: Option<OffsetDateTime>,
    pub scheduled_to_be_cancelled: bool,
}

#[derive(Debug, Clone)]
pub struct GeneratedUsage {
    pub id: Uuid,
    pub links_count: i32,
    pub links_limit: i32,
    pub clicks_count: i32,
    pub clicks_limit: i32,
}

/// Generates verified, email/password fixture accounts on an active business plan.
pub struct AccountGenerator {
    hash_cost: u32,
}

impl AccountGenerator {
    /// Creates a generator for business-tier accounts.
    pub fn new() -> Self {
        Self {
            hash_cost: DEFAULT_HASH_COST,
        }
    }

    /// Sets the bcrypt cost used for the password hash.
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    /// Generates an account stamped with the current time.
    pub fn generate(&self) -> Result<GeneratedAccount, BcryptError> {
        self.generate_at(OffsetDateTime::now_utc())
    }

    /// Generates an account as if created at `now`.
    ///
    /// The email embeds `now` in milliseconds, so accounts generated at least
    /// one millisecond apart never collide.
    pub fn generate_at(&self, now: OffsetDateTime) -> Result<GeneratedAccount, BcryptError> {
        let email = fixture_email(now);
        let password_hash = hash_password(FIXTURE_PASSWORD, self.hash_cost)?;

        Ok(GeneratedAccount {
            id: Uuid::new_v4(),
            name: FIXTURE_NAME.to_string(),
            password: FIXTURE_PASSWORD.to_string(),
            password_hash,
            // Fixture accounts skip email confirmation
            verified: true,
            role: ROLE_USER,
            auth_provider: GeneratedAuthProvider {
                id: Uuid::new_v4(),
                provider: PROVIDER_EMAIL,
                provider_id: email.clone(),
            },
            subscription: GeneratedSubscription {
                id: Uuid::new_v4(),
                plan: PLAN_BUSINESS,
                status: STATUS_ACTIVE,
                start_date: now,
                end_date: None,
                next_billed_at: Some(now + BILLING_PERIOD),
                scheduled_to_be_cancelled: false,
            },
            usage: GeneratedUsage {
                id: Uuid::new_v4(),
                links_count: 0,
                links_limit: BUSINESS_LINKS_LIMIT,
                clicks_count: 0,
                clicks_limit: BUSINESS_CLICKS_LIMIT,
            },
            email,
        })
    }
}

impl Default for AccountGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// `business-test-<unix millis>@example.com`
pub fn fixture_email(now: OffsetDateTime) -> String {
    let millis = now.unix_timestamp_nanos() / 1_000_000;
    format!("{EMAIL_PREFIX}-{millis}@{EMAIL_DOMAIN}")
}
