use super::error::{EntityApiErrorKind, Error};
use entity::transactions::{ActiveModel, Column, Entity, Model};
use entity::{users, Id};
use sea_orm::{entity::prelude::*, ActiveValue::Set, ConnectionTrait, TransactionTrait};

use log::*;

/// Records a credit movement and adjusts the owning user's balance. Both
/// writes happen in one database transaction so the balance can never drift
/// from the sum of the movements.
pub async fn create(db: &impl TransactionTrait, transaction_model: Model) -> Result<Model, Error> {
    debug!(
        "New Transaction Model to be inserted: {:?}",
        transaction_model
    );

    let txn = db.begin().await?;
    let now = chrono::Utc::now();

    let user = users::Entity::find_by_id(transaction_model.user_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error {
            source: None,
            error_kind: EntityApiErrorKind::RecordNotFound,
        })?;

    let new_balance = user.credits + transaction_model.amount;
    let mut user_active: users::ActiveModel = user.into();
    user_active.credits = Set(new_balance);
    user_active.updated_at = Set(now.into());
    user_active.update(&txn).await?;

    let created = ActiveModel {
        user_id: Set(transaction_model.user_id),
        amount: Set(transaction_model.amount),
        description: Set(transaction_model.description),
        created_at: Set(now.into()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    Ok(created)
}

pub async fn find_by_id(db: &impl ConnectionTrait, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| Error {
        source: None,
        error_kind: EntityApiErrorKind::RecordNotFound,
    })
}

pub async fn find_by_user(db: &impl ConnectionTrait, user_id: Id) -> Result<Vec<Model>, Error> {
    Ok(Entity::find()
        .filter(Column::UserId.eq(user_id))
        .all(db)
        .await?)
}
