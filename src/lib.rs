//! Elective course recommendation service
//!
//! Builds an immutable course graph (catalog, prerequisite and career edges)
//! once at startup and answers recommendation requests against it.

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
