use crate::error::{DomainErrorKind, EntityErrorKind, Error, InternalErrorKind};
use crate::jwt::{issue_access_token, Jwt};
use crate::users;
use log::*;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use service::config::Config;
use utoipa::ToSchema;

pub use entity_api::user::{
    assign_authority, create, delete, find_all, find_by_email, find_by_id, update, Authority,
};

/// Login form payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Verifies a credential pair against the stored password hash and mints an
/// access token for the account.
///
/// Both an unknown email and a wrong password collapse into the same
/// unauthenticated error so the endpoint does not leak which accounts exist.
pub async fn authenticate(
    db: &DatabaseConnection,
    config: &Config,
    creds: Credentials,
) -> Result<(users::Model, Jwt), Error> {
    let user = find_by_email(db, &creds.email).await?.ok_or_else(|| {
        warn!("Authentication failed, unknown account: {:?}", creds.email);
        Error::with_message(
            DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::Unauthenticated)),
            "invalid email or password",
        )
    })?;

    entity_api::user::verify_password(&creds.password, &user.password)
        .await
        .map_err(|_| {
            warn!("Authentication failed, wrong password for: {:?}", creds.email);
            Error::with_message(
                DomainErrorKind::Internal(InternalErrorKind::Entity(
                    EntityErrorKind::Unauthenticated,
                )),
                "invalid email or password",
            )
        })?;

    let jwt = issue_access_token(config, &user)?;

    Ok((user, jwt))
}
