use super::error::{EntityApiErrorKind, Error};
use entity::user_events::{ActiveModel, Column, Entity, Model};
use entity::{events, Id};
use sea_orm::{entity::prelude::*, ActiveValue::Set, ConnectionTrait, TransactionTrait};

use log::*;

/// Atomically claims an event for a user: inserts the ownership link and sets
/// the event's `is_claimed` flag in one database transaction.
///
/// The unique index on `user_events.event_id` is the serialization point for
/// concurrent claims; the losing insert surfaces as `RecordAlreadyExists` and
/// the transaction rolls back without touching the flag.
pub async fn claim(db: &impl TransactionTrait, user_id: Id, event_id: Id) -> Result<Model, Error> {
    let txn = db.begin().await?;
    let now = chrono::Utc::now();

    let link = ActiveModel {
        user_id: Set(user_id),
        event_id: Set(event_id),
        created_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let event = events::Entity::find_by_id(event_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error {
            source: None,
            error_kind: EntityApiErrorKind::RecordNotFound,
        })?;

    let mut event_active: events::ActiveModel = event.into();
    event_active.is_claimed = Set(true);
    event_active.updated_at = Set(now.into());
    event_active.update(&txn).await?;

    txn.commit().await?;

    debug!("Event {event_id} claimed by user {user_id}");

    Ok(link)
}

/// Returns the ownership link for an event, if any user has claimed it.
pub async fn find_by_event(
    db: &impl ConnectionTrait,
    event_id: Id,
) -> Result<Option<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::EventId.eq(event_id))
        .one(db)
        .await?)
}

/// Returns every event ownership link held by a user.
pub async fn find_by_user(db: &impl ConnectionTrait, user_id: Id) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .all(db)
        .await?)
}
