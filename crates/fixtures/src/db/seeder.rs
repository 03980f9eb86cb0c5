//! Database seeding for fixture accounts.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction, postgres::PgPoolOptions};
use thiserror::Error;
use tracing::info;

use crate::auth::BcryptError;
use crate::config::SeedConfig;
use crate::generators::GeneratedAccount;
use crate::models::{AuthProvider, CreatedAccount, Subscription, Usage, User};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] BcryptError),
}

/// Somewhere a fixture account can be written.
///
/// `close` takes the store by value, so a store is released at most once.
#[async_trait]
pub trait AccountStore: Send + Sync + Sized {
    /// Writes the user and all of its related rows as one unit and returns
    /// what was stored.
    async fn create_account(
        &self,
        account: &GeneratedAccount,
    ) -> Result<CreatedAccount, SeedError>;

    /// Releases the underlying connection.
    async fn close(self);
}

/// PostgreSQL-backed account store.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Prepares a single-connection pool to `config.database_url`.
    ///
    /// Nothing is dialled until the first write, so an unreachable database
    /// surfaces as a `create_account` error. Only a malformed URL fails here.
    pub fn connect_lazy(config: &SeedConfig) -> Result<Self, SeedError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(config.acquire_timeout)
            .connect_lazy(&config.database_url)?;

        Ok(Self::new(pool))
    }

    async fn insert_user(
        tx: &mut Transaction<'_, Postgres>,
        account: &GeneratedAccount,
    ) -> Result<User, SeedError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, name, password, verified, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            RETURNING id, email, name, password, verified, role, created_at
            "#,
        )
        .bind(account.id)
        .bind(&account.email)
        .bind(&account.name)
        .bind(&account.password_hash)
        .bind(account.verified)
        .bind(account.role)
        .fetch_one(&mut **tx)
        .await?;

        Ok(user)
    }

    async fn insert_auth_provider(
        tx: &mut Transaction<'_, Postgres>,
        account: &GeneratedAccount,
    ) -> Result<AuthProvider, SeedError> {
        let provider = &account.auth_provider;
        let row = sqlx::query_as::<_, AuthProvider>(
            r#"
            INSERT INTO auth_providers (id, user_id, provider, provider_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, provider, provider_id
            "#,
        )
        .bind(provider.id)
        .bind(account.id)
        .bind(provider.provider)
        .bind(&provider.provider_id)
        .fetch_one(&mut **tx)
        .await?;

        Ok(row)
    }

    async fn insert_subscription(
        tx: &mut Transaction<'_, Postgres>,
        account: &GeneratedAccount,
    ) -> Result<Subscription, SeedError> {
        let sub = &account.subscription;
        let row = sqlx::query_as::<_, Subscription>(
            r#"
            INSERT INTO subscriptions (
                id, user_id, plan, status,
                start_date, end_date, next_billed_at, scheduled_to_be_cancelled
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, plan, status,
                      start_date, end_date, next_billed_at, scheduled_to_be_cancelled
            "#,
        )
        .bind(sub.id)
        .bind(account.id)
        .bind(sub.plan)
        .bind(sub.status)
        .bind(sub.start_date)
        .bind(sub.end_date)
        .bind(sub.next_billed_at)
        .bind(sub.scheduled_to_be_cancelled)
        .fetch_one(&mut **tx)
        .await?;

        Ok(row)
    }

    async fn insert_usage(
        tx: &mut Transaction<'_, Postgres>,
        account: &GeneratedAccount,
    ) -> Result<Usage, SeedError> {
        let usage = &account.usage;
        let row = sqlx::query_as::<_, Usage>(
            r#"
            INSERT INTO usage (id, user_id, links_count, links_limit, clicks_count, clicks_limit)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, links_count, links_limit, clicks_count, clicks_limit
            "#,
        )
        .bind(usage.id)
        .bind(account.id)
        .bind(usage.links_count)
        .bind(usage.links_limit)
        .bind(usage.clicks_count)
        .bind(usage.clicks_limit)
        .fetch_one(&mut **tx)
        .await?;

        Ok(row)
    }
}

#[async_trait]
impl AccountStore for Seeder {
    async fn create_account(
        &self,
        account: &GeneratedAccount,
    ) -> Result<CreatedAccount, SeedError> {
        info!("Seeding account {}...", account.email);

        // Dropping the transaction on an early return rolls it back
        let mut tx = self.pool.begin().await?;

        let user = Self::insert_user(&mut tx, account).await?;
        let auth_provider = Self::insert_auth_provider(&mut tx, account).await?;
        let subscription = Self::insert_subscription(&mut tx, account).await?;
        let usage = Self::insert_usage(&mut tx, account).await?;

        tx.commit().await?;

        info!("Seeded account {}", user.id);
        Ok(CreatedAccount {
            user,
            auth_providers: vec![auth_provider],
            subscription,
            usage,
        })
    }

    async fn close(self) {
        self.pool.close().await;
        info!("Database connection closed");
    }
}
