//! This module re-exports various items from the `entity_api` crate.
//!
//! The purpose of this re-export is to ensure that consumers of the `domain` crate do not need to
//! directly depend on the `entity_api` crate. By re-exporting these items, we provide a clear and
//! consistent interface for working with query filters within the domain layer, while encapsulating
//! the underlying implementation details remain in the `entity_api` crate.
pub use entity_api::IntoQueryFilterMap;
pub use entity_api::QueryFilterMap;

// Re-exports from `entity` crate via `entity_api`
pub use entity_api::{
    contributions, events, organizers, people, productions, roles, transactions, user_authorities,
    user_events, user_venues, users, venues, Id,
};

pub mod claim;
pub mod contribution;
pub mod error;
pub mod event;
pub mod jwt;
pub mod organizer;
pub mod person;
pub mod production;
pub mod role;
pub mod transaction;
pub mod user;
pub mod venue;
