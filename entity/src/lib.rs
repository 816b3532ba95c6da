use uuid::Uuid;

// Catalog entities
pub mod contributions;
pub mod events;
pub mod organizers;
pub mod people;
pub mod productions;
pub mod roles;
pub mod venues;

// Accounts, credits and claims
pub mod jwt;
pub mod transactions;
pub mod user_authorities;
pub mod user_events;
pub mod user_venues;
pub mod users;

/// A type alias that represents any Entity's internal id field data type.
/// Aliased so that it's easy to change the underlying type if necessary.
pub type Id = Uuid;
