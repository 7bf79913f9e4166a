//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Repositories over SeaORM entities

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{ProductRepository, ProductStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockProductRepository, MockUserRepository};
