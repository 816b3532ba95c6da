//! Issuing and verifying the platform's bearer access tokens.
//!
//! Tokens are HMAC-SHA256 signed JWTs carrying the account email and a single
//! role claim, plus the standard `iss`/`aud`/`exp`/`iat` set. Verification is
//! purely cryptographic: there is no server-side token store and no
//! revocation, so a token stays valid until its expiry even if the account is
//! deleted or its authorities change. The claim eligibility check covers that
//! window by re-resolving the account on every claim attempt.

use crate::error::{AuthErrorKind, DomainErrorKind, Error};
use entity::users;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::*;
use service::config::Config;

pub use claims::AccessClaims;
// re-export the Jwt struct from the entity module
pub use entity::jwt::Jwt;

pub(crate) mod claims;

/// Fixed access token lifetime.
pub const ACCESS_TOKEN_TTL_SECS: i64 = 3600;

/// Mints a signed access token for an authenticated user.
///
/// The `role` claim is taken from the first authority on the account;
/// accounts without any authority are minted as plain `user`.
pub fn issue_access_token(config: &Config, user: &users::Model) -> Result<Jwt, Error> {
    let role = user
        .authorities
        .first()
        .map(|user_authority| user_authority.authority.clone())
        .unwrap_or_default();

    let now = chrono::Utc::now().timestamp();
    let claims = AccessClaims {
        email: user.email.clone(),
        role,
        iss: config.jwt_issuer().to_string(),
        aud: config.jwt_audience().to_string(),
        exp: (now + ACCESS_TOKEN_TTL_SECS) as usize,
        iat: now as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret().as_bytes()),
    )?;

    Ok(Jwt {
        token,
        sub: user.email.clone(),
    })
}

/// Verifies a bearer token's signature, issuer, audience and expiry and
/// returns its claim set.
///
/// Every failure collapses into `AuthErrorKind::InvalidToken`; callers must
/// not be able to distinguish a bad signature from an expired token.
pub fn verify_access_token(config: &Config, token: &str) -> Result<AccessClaims, Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[config.jwt_issuer()]);
    validation.set_audience(&[config.jwt_audience()]);
    validation.leeway = 0;

    decode::<AccessClaims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret().as_bytes()),
        &validation,
    )
    .map(|token_data| token_data.claims)
    .map_err(|err| {
        debug!("Access token rejected: {err:?}");
        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Auth(AuthErrorKind::InvalidToken),
            message: Some("invalid token".to_string()),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::user_authorities::{self, Authority};
    use entity::Id;

    fn test_config() -> Config {
        Config::default()
    }

    fn test_user(authorities: Vec<Authority>) -> users::Model {
        let now = chrono::Utc::now();
        let id = Id::new_v4();
        users::Model {
            id,
            email: "box-office@stadttheater.example".to_string(),
            first_name: "Mara".to_string(),
            last_name: "Jensen".to_string(),
            password: "irrelevant".to_string(),
            credits: 0,
            created_at: now.into(),
            updated_at: now.into(),
            authorities: authorities
                .into_iter()
                .map(|authority| user_authorities::Model {
                    id: Id::new_v4(),
                    user_id: id,
                    authority,
                    created_at: now.into(),
                })
                .collect(),
        }
    }

    #[test]
    fn issued_token_round_trips_through_verification() {
        let config = test_config();
        let user = test_user(vec![Authority::ClaimsManager]);

        let jwt = issue_access_token(&config, &user).unwrap();
        let claims = verify_access_token(&config, &jwt.token).unwrap();

        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, Authority::ClaimsManager);
        assert_eq!(claims.iss, config.jwt_issuer());
        assert_eq!(claims.aud, config.jwt_audience());
        assert_eq!(claims.exp - claims.iat, ACCESS_TOKEN_TTL_SECS as usize);
    }

    #[test]
    fn token_role_is_first_authority_found() {
        let config = test_config();
        let user = test_user(vec![Authority::Admin, Authority::Developer]);

        let jwt = issue_access_token(&config, &user).unwrap();
        let claims = verify_access_token(&config, &jwt.token).unwrap();

        assert_eq!(claims.role, Authority::Admin);
    }

    #[test]
    fn account_without_authorities_is_minted_as_plain_user() {
        let config = test_config();
        let user = test_user(vec![]);

        let jwt = issue_access_token(&config, &user).unwrap();
        let claims = verify_access_token(&config, &jwt.token).unwrap();

        assert_eq!(claims.role, Authority::User);
    }

    #[test]
    fn expired_token_is_invalid_even_with_a_valid_signature() {
        let config = test_config();
        let now = chrono::Utc::now().timestamp();
        let claims = AccessClaims {
            email: "box-office@stadttheater.example".to_string(),
            role: Authority::User,
            iss: config.jwt_issuer().to_string(),
            aud: config.jwt_audience().to_string(),
            exp: (now - ACCESS_TOKEN_TTL_SECS) as usize,
            iat: (now - 2 * ACCESS_TOKEN_TTL_SECS) as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret().as_bytes()),
        )
        .unwrap();

        let err = verify_access_token(&config, &token).unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Auth(AuthErrorKind::InvalidToken)
        );
    }

    #[test]
    fn token_with_wrong_audience_is_invalid() {
        let config = test_config();
        let now = chrono::Utc::now().timestamp();
        let claims = AccessClaims {
            email: "box-office@stadttheater.example".to_string(),
            role: Authority::User,
            iss: config.jwt_issuer().to_string(),
            aud: "another-service".to_string(),
            exp: (now + ACCESS_TOKEN_TTL_SECS) as usize,
            iat: now as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret().as_bytes()),
        )
        .unwrap();

        let err = verify_access_token(&config, &token).unwrap_err();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::Auth(AuthErrorKind::InvalidToken)
        );
    }

    #[test]
    fn tampered_token_is_invalid() {
        let config = test_config();
        let user = test_user(vec![Authority::User]);
        let jwt = issue_access_token(&config, &user).unwrap();

        let mut tampered = jwt.token;
        tampered.pop();
        tampered.push('x');

        assert!(verify_access_token(&config, &tampered).is_err());
    }
}
