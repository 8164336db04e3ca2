//! The `tasknest` library crate.
//!
//! Core business logic for an authenticated task-management API: credential
//! and task stores, the token service, the auth and task services, HTTP
//! routing, and error handling. The binary (`main.rs`) wires these together
//! into an actix-web application.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod tasks;

pub use crate::auth::{AuthService, TokenService};
pub use crate::error::AppError;
pub use crate::store::{TaskStore, UserStore};
pub use crate::tasks::TaskService;
