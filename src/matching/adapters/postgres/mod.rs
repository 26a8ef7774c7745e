//! `PostgreSQL` implementation of the matching store port using Diesel ORM.

mod models;
mod schema;
mod store;

pub use store::{MatchingPgPool, PostgresMatchingStore};
