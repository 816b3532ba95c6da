use super::error::{EntityApiErrorKind, Error};
use entity::user_venues::{ActiveModel, Column, Entity, Model};
use entity::{venues, Id};
use sea_orm::{entity::prelude::*, ActiveValue::Set, ConnectionTrait, TransactionTrait};

use log::*;

/// Atomically claims a venue for a user: inserts the ownership link and sets
/// the venue's `is_claimed` flag in one database transaction.
///
/// The unique index on `user_venues.venue_id` is the serialization point for
/// concurrent claims; the losing insert surfaces as `RecordAlreadyExists` and
/// the transaction rolls back without touching the flag.
pub async fn claim(db: &impl TransactionTrait, user_id: Id, venue_id: Id) -> Result<Model, Error> {
    let txn = db.begin().await?;
    let now = chrono::Utc::now();

    let link = ActiveModel {
        user_id: Set(user_id),
        venue_id: Set(venue_id),
        created_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let venue = venues::Entity::find_by_id(venue_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error {
            source: None,
            error_kind: EntityApiErrorKind::RecordNotFound,
        })?;

    let mut venue_active: venues::ActiveModel = venue.into();
    venue_active.is_claimed = Set(true);
    venue_active.updated_at = Set(now.into());
    venue_active.update(&txn).await?;

    txn.commit().await?;

    debug!("Venue {venue_id} claimed by user {user_id}");

    Ok(link)
}

/// Returns the ownership link for a venue, if any user has claimed it.
pub async fn find_by_venue(
    db: &impl ConnectionTrait,
    venue_id: Id,
) -> Result<Option<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::VenueId.eq(venue_id))
        .one(db)
        .await?)
}

/// Returns every venue ownership link held by a user.
pub async fn find_by_user(db: &impl ConnectionTrait, user_id: Id) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .all(db)
        .await?)
}

#[cfg(test)]
// We need to gate seaORM's mock feature behind conditional compilation because
// the feature removes the Clone trait implementation from seaORM's DatabaseConnection.
// see https://github.com/SeaQL/sea-orm/issues/830
#[cfg(feature = "mock")]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction};

    #[tokio::test]
    async fn claim_inserts_link_and_sets_flag_in_one_transaction() -> Result<(), Error> {
        let now = chrono::Utc::now();
        let user_id = Id::new_v4();
        let venue_id = Id::new_v4();

        let link = Model {
            id: Id::new_v4(),
            user_id,
            venue_id,
            created_at: now.into(),
        };
        let venue = venues::Model {
            id: venue_id,
            name: "Stadttheater".to_owned(),
            address: None,
            city: None,
            capacity: None,
            is_claimed: false,
            created_at: now.into(),
            updated_at: now.into(),
        };
        let claimed_venue = venues::Model {
            is_claimed: true,
            ..venue.clone()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![link.clone()]])
            .append_query_results(vec![vec![venue]])
            .append_query_results(vec![vec![claimed_venue]])
            .into_connection();

        let created = claim(&db, user_id, venue_id).await?;

        assert_eq!(created.user_id, user_id);
        assert_eq!(created.venue_id, venue_id);

        // All statements ran inside a single transaction.
        let log = db.into_transaction_log();
        assert!(matches!(log.first(), Some(Transaction { .. })));
        assert_eq!(log.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn find_by_venue_returns_none_when_unclaimed() -> Result<(), Error> {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        assert!(find_by_venue(&db, Id::new_v4()).await?.is_none());

        Ok(())
    }
}
