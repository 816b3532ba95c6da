//! Claim set carried by access tokens.

use entity::user_authorities::Authority;
use serde::{Deserialize, Serialize};

/// Claims minted into every access token issued at login and required back
/// from every bearer request.
///
/// The `role` claim is a single authority string; accounts holding several
/// authorities get only the first one found. See the token minting logic in
/// the parent module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub email: String,
    pub role: Authority,
    pub iss: String,
    pub aud: String,
    pub exp: usize,
    pub iat: usize,
}
