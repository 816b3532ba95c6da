use super::error::{EntityApiErrorKind, Error};
use entity::contributions::{ActiveModel, Entity, Model};
use entity::Id;
use sea_orm::{
    entity::prelude::*,
    ActiveValue::{Set, Unchanged},
    ConnectionTrait, TryIntoModel,
};

use log::*;

pub async fn create(db: &impl ConnectionTrait, contribution_model: Model) -> Result<Model, Error> {
    debug!(
        "New Contribution Model to be inserted: {:?}",
        contribution_model
    );

    let now = chrono::Utc::now();

    let contribution_active_model: ActiveModel = ActiveModel {
        person_id: Set(contribution_model.person_id),
        production_id: Set(contribution_model.production_id),
        role_id: Set(contribution_model.role_id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
        ..Default::default()
    };

    Ok(contribution_active_model.save(db).await?.try_into_model()?)
}

pub async fn update(db: &impl ConnectionTrait, id: Id, model: Model) -> Result<Model, Error> {
    let result = Entity::find_by_id(id).one(db).await?;

    match result {
        Some(contribution) => {
            debug!(
                "Existing Contribution model to be Updated: {:?}",
                contribution
            );

            let active_model: ActiveModel = ActiveModel {
                id: Unchanged(contribution.id),
                person_id: Set(model.person_id),
                production_id: Set(model.production_id),
                role_id: Set(model.role_id),
                updated_at: Set(chrono::Utc::now().into()),
                created_at: Unchanged(contribution.created_at),
            };

            Ok(active_model.update(db).await?.try_into_model()?)
        }
        None => {
            debug!("Contribution with id {} not found", id);

            Err(Error {
                source: None,
                error_kind: EntityApiErrorKind::RecordNotFound,
            })
        }
    }
}

pub async fn delete_by_id(db: &impl ConnectionTrait, id: Id) -> Result<(), Error> {
    let result = find_by_id(db, id).await?;

    result.delete(db).await?;
    Ok(())
}

pub async fn find_by_id(db: &impl ConnectionTrait, id: Id) -> Result<Model, Error> {
    Entity::find_by_id(id).one(db).await?.ok_or_else(|| Error {
        source: None,
        error_kind: EntityApiErrorKind::RecordNotFound,
    })
}
