//!
//! In-memory stores for users and tasks.
//!
//! Both stores are constructed once at startup and handed to the services
//! explicitly; there is no global database instance. Process lifetime is the
//! persistence boundary.

pub mod tasks;
pub mod users;

pub use tasks::TaskStore;
pub use users::UserStore;
