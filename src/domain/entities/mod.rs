//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! inputs use separate `New*` structs so storage-assigned fields (`id`,
//! `counter`, timestamps) never appear half-initialized.

pub mod link;
pub mod user;

pub use link::{Link, NewLink};
pub use user::{NewUser, User};
