//! `larder-core`: building blocks shared by the household larder crates.
//!
//! This crate contains **pure domain** primitives (no IO, no persistence).

pub mod clock;
pub mod entity;
pub mod error;
pub mod input;
pub mod name;
pub mod value_object;

pub use clock::{Clock, FixedClock, SystemClock};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use name::{canonicalize, validate_lookup_key};
pub use value_object::ValueObject;
