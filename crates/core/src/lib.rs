//! `boardroom-core` — shared building blocks for the dashboard crates.
//!
//! Nothing in here knows about roles, locales or navigation.

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::{SessionId, UserId};
pub use value_object::ValueObject;
