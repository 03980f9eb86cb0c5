//! Fixture accounts for manual end-to-end testing.
//!
//! This crate provisions throwaway accounts, each a verified user with an
//! email/password auth provider, an active subscription and a usage quota,
//! so the business-tier feature path can be exercised by hand.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fixtures::prelude::*;
//!
//! let config = SeedConfig::from_env();
//! let seeder = Seeder::connect_lazy(&config)?;
//! let credentials = run(seeder, &AccountGenerator::new()).await?;
//! ```
//!
//! Output includes the plaintext password. Only point this at local
//! development databases.

pub mod auth;
pub mod config;
pub mod db;
pub mod generators;
pub mod models;
pub mod report;
pub mod runner;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{AccountStore, SeedError, Seeder};
    pub use crate::generators::{AccountGenerator, GeneratedAccount};
    pub use crate::models::{CreatedAccount, Credentials};
    pub use crate::runner::{exit_code, run};
}
