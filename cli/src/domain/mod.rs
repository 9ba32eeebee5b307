//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::application`,
//! `tokio`, `std::fs`, `std::process`, or `std::net`. All functions are
//! synchronous and take data in, returning data out.

pub mod action;
pub mod error;
pub mod registry;
pub mod service;
pub mod target;

pub use action::{Action, CommandKind, remote_command};
pub use error::{ApplicationError, TargetError};
pub use registry::HOST_REGISTRY;
pub use service::{ApplicationSet, Service};
pub use target::{default_targets, resolve_targets};
