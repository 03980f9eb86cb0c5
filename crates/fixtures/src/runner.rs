//! One seeding run from start to exit code.

use tracing::{error, info};

use crate::db::{AccountStore, SeedError};
use crate::generators::AccountGenerator;
use crate::models::Credentials;
use crate::report;

/// Generates one fixture account, writes it through `store` and prints the
/// summary.
///
/// The store is closed exactly once, whether or not the account was created.
pub async fn run<S: AccountStore>(
    store: S,
    generator: &AccountGenerator,
) -> Result<Credentials, SeedError> {
    let result = seed_one(&store, generator).await;
    store.close().await;

    if let Err(e) = &result {
        error!("Error creating test user: {e}");
    }
    result
}

async fn seed_one<S: AccountStore>(
    store: &S,
    generator: &AccountGenerator,
) -> Result<Credentials, SeedError> {
    let account = generator.generate()?;
    println!("{}", report::render_intro(&account));

    let created = store.create_account(&account).await?;
    let credentials = Credentials {
        email: account.email,
        password: account.password,
        user_id: created.user.id,
    };

    print!("{}", report::render_summary(&credentials, &created));
    info!("Created test user {}", credentials.user_id);

    Ok(credentials)
}

/// Process exit status for a finished run.
pub fn exit_code<T, E>(result: &Result<T, E>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
