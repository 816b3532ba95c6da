use crate::Error;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use domain::error::{DomainErrorKind, EntityErrorKind, Error as DomainError, InternalErrorKind};
use log::*;
use semver::Version;
use service::config::ApiVersion;

/// Rejects requests whose `x-version` header is missing, unparseable or not a
/// currently supported API version.
pub(crate) struct CompareApiVersion(pub Version);

fn invalid_version(message: &str) -> Error {
    Error::from(DomainError::with_message(
        DomainErrorKind::Internal(InternalErrorKind::Entity(EntityErrorKind::Invalid)),
        message,
    ))
}

#[async_trait]
impl<S> FromRequestParts<S> for CompareApiVersion
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(ApiVersion::field_name())
            .ok_or_else(|| invalid_version("missing x-version header"))?;

        let version_str = header
            .to_str()
            .map_err(|_| invalid_version("invalid x-version header"))?;

        let version = Version::parse(version_str)
            .map_err(|_| invalid_version("invalid x-version header"))?;

        if !ApiVersion::versions()
            .iter()
            .any(|supported| *supported == version.to_string())
        {
            debug!("Request rejected: unsupported API version {version}");
            return Err(invalid_version("unsupported API version"));
        }

        Ok(CompareApiVersion(version))
    }
}
