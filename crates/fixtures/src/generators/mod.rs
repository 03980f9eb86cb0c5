//! Entity generators for fixture data.
//!
//! - [`AccountGenerator`]: a verified user with its auth provider, subscription and usage quota

pub mod account;

pub use account::{
    AccountGenerator, GeneratedAccount, GeneratedAuthProvider, GeneratedSubscription,
    GeneratedUsage,
};
