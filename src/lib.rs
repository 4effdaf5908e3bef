//! Data-synchronization core for an administrative console client: the
//! authenticated gateway, session persistence, optimistic entity mutations,
//! and paginated list queries shared by every entity screen.

#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

pub mod configuration;
pub mod domain;
pub mod infrastructure;
