//! Creates one business-tier test user for manual end-to-end testing.
//!
//! Run with:
//! ```
//! cargo run -p fixtures --bin seed-business-user
//! ```
//!
//! Prints the plaintext password. Local development databases only.

use std::process::ExitCode;

use fixtures::prelude::*;
use fixtures::report;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();
    let result = seed(&config).await;

    match &result {
        Ok(credentials) => println!("{}", report::render_next_steps(&config, credentials)),
        Err(e) => eprintln!("Failed to create test user: {e}"),
    }

    ExitCode::from(exit_code(&result))
}

async fn seed(config: &SeedConfig) -> anyhow::Result<Credentials> {
    let seeder = Seeder::connect_lazy(config).inspect_err(|e| {
        tracing::error!("Error creating test user: {e}");
    })?;
    let generator = AccountGenerator::new().with_hash_cost(config.hash_cost);

    Ok(run(seeder, &generator).await?)
}
