//! Persistence adapters for the [`crate::domain::ports::UserRepository`] port.
//!
//! - [`DieselUserRepository`] stores users in PostgreSQL through
//!   `diesel-async` and a `bb8` pool.
//! - [`InMemoryUserRepository`] keeps users in process memory.
//!
//! Diesel row structs and the table schema stay private to this module.
//!
//! # Example
//!
//! ```ignore
//! use signup::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/signup")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod in_memory_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
