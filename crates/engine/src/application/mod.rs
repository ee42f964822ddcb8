//! Application layer - the caller-facing boundary.
//!
//! `services` implement the operations the external HTTP layer consumes;
//! `dto` holds their request and view types. Every failure crosses this
//! boundary as a typed `DomainError`, never a panic.

pub mod dto;
pub mod services;
