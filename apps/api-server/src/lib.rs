//! # Blog API Server
//!
//! Actix-web application exposing CRUD operations on blogs.
//! The binary in `main.rs` wires these modules to a configured store.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;
