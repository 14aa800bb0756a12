//! Core types and trait definitions for the emails service.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! store backends and the GraphQL layer both depend on it.

pub mod error;
pub mod record;
pub mod service;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use record::{CreateEmailInput, EmailRecord, NewEmail, UpdateEmailInput};
pub use service::{EmailService, StoreService};
pub use store::EmailStore;
