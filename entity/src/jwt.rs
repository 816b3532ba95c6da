use serde::Serialize;
use utoipa::ToSchema;

/// Represents a signed access token handed back by the login endpoint.
/// Note: This struct does not have a corresponding entity in the database.
///
/// - `token`: the encoded JWT string.
/// - `sub`: the subject (account email) for conveniently accessing it
///   without having to decode the JWT.
#[derive(Serialize, Debug, ToSchema)]
#[schema(as = jwt::Jwt)] // OpenAPI schema
pub struct Jwt {
    pub token: String,
    pub sub: String,
}
