//! The claims workflow: letting a registered user take ownership of a venue
//! or an event.
//!
//! Eligibility is checked against current stored state (does the account
//! still exist, does the target exist, is it still unclaimed), then the
//! mutation runs as a single database transaction in `entity_api`. The
//! eligibility read is advisory only: two racing claims are serialized by the
//! unique index on the ownership-link table, so the losing writer gets the
//! same conflict error as a late reader.

use crate::error::{DomainErrorKind, EntityErrorKind, Error, InternalErrorKind};
use crate::{user_events, user_venues, Id};
use entity_api::{event, user, user_event, user_venue, venue};
use log::*;
use sea_orm::DatabaseConnection;

fn not_found(message: &str) -> Error {
    Error::with_message(
        DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::NotFound)),
        message,
    )
}

fn already_claimed(message: &str) -> Error {
    Error::with_message(
        DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::Conflict)),
        message,
    )
}

/// Claims a venue for the account behind `claimant_email`.
///
/// `claimant_email` comes from a verified token; the account is re-resolved
/// here because tokens stay valid after an account is deleted.
pub async fn claim_venue(
    db: &DatabaseConnection,
    claimant_email: &str,
    venue_id: Id,
) -> Result<user_venues::Model, Error> {
    let claimant = user::find_by_email(db, claimant_email)
        .await?
        .ok_or_else(|| {
            warn!("Venue claim attempt by unknown account {claimant_email}");
            not_found("user account not found")
        })?;

    let venue = venue::find_by_id(db, venue_id)
        .await
        .map_err(|err| match Error::from(err) {
            Error {
                error_kind:
                    DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::NotFound)),
                ..
            } => not_found("venue not found"),
            other => other,
        })?;

    if venue.is_claimed || user_venue::find_by_venue(db, venue_id).await?.is_some() {
        debug!("Venue {venue_id} is already claimed");
        return Err(already_claimed("This place has already been claimed"));
    }

    // The unique index on user_venues.venue_id decides any race from here on;
    // a losing insert maps to the same conflict error.
    let link = user_venue::claim(db, claimant.id, venue_id)
        .await
        .map_err(|err| match Error::from(err) {
            Error {
                error_kind:
                    DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::Conflict)),
                ..
            } => already_claimed("This place has already been claimed"),
            other => other,
        })?;

    info!("Venue {venue_id} claimed by {claimant_email}");

    Ok(link)
}

/// Claims an event for the account behind `claimant_email`.
pub async fn claim_event(
    db: &DatabaseConnection,
    claimant_email: &str,
    event_id: Id,
) -> Result<user_events::Model, Error> {
    let claimant = user::find_by_email(db, claimant_email)
        .await?
        .ok_or_else(|| {
            warn!("Event claim attempt by unknown account {claimant_email}");
            not_found("user account not found")
        })?;

    let event = event::find_by_id(db, event_id)
        .await
        .map_err(|err| match Error::from(err) {
            Error {
                error_kind:
                    DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::NotFound)),
                ..
            } => not_found("event not found"),
            other => other,
        })?;

    if event.is_claimed || user_event::find_by_event(db, event_id).await?.is_some() {
        debug!("Event {event_id} is already claimed");
        return Err(already_claimed("This event has already been claimed"));
    }

    let link = user_event::claim(db, claimant.id, event_id)
        .await
        .map_err(|err| match Error::from(err) {
            Error {
                error_kind:
                    DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::Conflict)),
                ..
            } => already_claimed("This event has already been claimed"),
            other => other,
        })?;

    info!("Event {event_id} claimed by {claimant_email}");

    Ok(link)
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use crate::{user_authorities, users, venues};
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn test_user() -> users::Model {
        let now = chrono::Utc::now();
        users::Model {
            id: Id::new_v4(),
            email: "demo@marquee.local".to_string(),
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            password: "hash".to_string(),
            credits: 0,
            created_at: now.into(),
            updated_at: now.into(),
            authorities: Vec::new(),
        }
    }

    fn test_venue(is_claimed: bool) -> venues::Model {
        let now = chrono::Utc::now();
        venues::Model {
            id: Id::new_v4(),
            name: "Stadttheater".to_string(),
            address: None,
            city: Some("Vienna".to_string()),
            capacity: Some(820),
            is_claimed,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn claim_venue_rejects_unknown_account_as_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<(users::Model, user_authorities::Model)>::new()])
            .into_connection();

        let err = claim_venue(&db, "ghost@marquee.local", Id::new_v4())
            .await
            .unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::NotFound))
        );
        assert_eq!(err.message.as_deref(), Some("user account not found"));
    }

    #[tokio::test]
    async fn claim_venue_rejects_already_claimed_venue_without_writing() {
        let user = test_user();
        let venue = test_venue(true);
        let venue_id = venue.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![(
                user.clone(),
                None::<user_authorities::Model>,
            )]])
            .append_query_results([vec![venue]])
            .into_connection();

        let err = claim_venue(&db, &user.email, venue_id).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::Conflict))
        );

        // Only reads were issued; no transaction was opened for the mutation.
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 2);
    }

    #[tokio::test]
    async fn claim_venue_rejects_venue_with_existing_link_even_if_flag_unset() {
        let user = test_user();
        let venue = test_venue(false);
        let venue_id = venue.id;
        let now = chrono::Utc::now();
        // The ownership link is the authoritative record; a link with the
        // denormalized flag still unset must read as claimed.
        let link = user_venues::Model {
            id: Id::new_v4(),
            user_id: Id::new_v4(),
            venue_id,
            created_at: now.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![(
                user.clone(),
                None::<user_authorities::Model>,
            )]])
            .append_query_results([vec![venue]])
            .append_query_results([vec![link]])
            .into_connection();

        let err = claim_venue(&db, &user.email, venue_id).await.unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::Conflict))
        );
        assert_eq!(
            err.message.as_deref(),
            Some("This place has already been claimed")
        );

        // Three reads, no mutation transaction.
        let log = db.into_transaction_log();
        assert_eq!(log.len(), 3);
    }

    #[tokio::test]
    async fn claim_venue_succeeds_for_unclaimed_venue() {
        let user = test_user();
        let venue = test_venue(false);
        let venue_id = venue.id;
        let now = chrono::Utc::now();
        let link = user_venues::Model {
            id: Id::new_v4(),
            user_id: user.id,
            venue_id,
            created_at: now.into(),
        };
        let claimed_venue = venues::Model {
            is_claimed: true,
            ..venue.clone()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![(
                user.clone(),
                None::<user_authorities::Model>,
            )]])
            .append_query_results([vec![venue]])
            .append_query_results([Vec::<user_venues::Model>::new()])
            .append_query_results([vec![link.clone()]])
            .append_query_results([vec![claimed_venue.clone()]])
            .append_query_results([vec![claimed_venue]])
            .into_connection();

        let created = claim_venue(&db, &user.email, venue_id).await.unwrap();

        assert_eq!(created.user_id, user.id);
        assert_eq!(created.venue_id, venue_id);
    }
}
