//! Database integration for seeding fixture data.
//!
//! [`AccountStore`] is the seam the runner writes through; [`Seeder`] is its
//! PostgreSQL implementation.

mod seeder;

pub use seeder::{AccountStore, SeedError, Seeder};
