//! This module holds typed parameters for various endpoint inputs.
//!
//! Each index endpoint takes an optional filter struct that deserializes from
//! the query string and converts into a `QueryFilterMap` for the domain layer.
//! Only present fields become filters; everything else is ignored by the
//! query builder.

pub(crate) mod contribution;
pub(crate) mod event;
pub(crate) mod organizer;
pub(crate) mod person;
pub(crate) mod production;
pub(crate) mod role;
pub(crate) mod transaction;
pub(crate) mod venue;

/// Page size used when a paginated index request does not specify `per_page`.
pub(crate) const DEFAULT_PER_PAGE: u64 = 50;
