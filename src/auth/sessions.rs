//! JWT token issuance and verification
//!
//! Tokens bind a user id under an HS256 signature with a server-held secret
//! injected at construction. There is no expiry claim and no revocation
//! list; a token is valid for as long as the secret stands.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT claims: the user id, nothing else.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
}

/// Opaque verification failure.
///
/// Signature mismatch, malformed structure, and an undecodable embedded id
/// all collapse here so callers cannot distinguish them.
#[derive(Debug, Error)]
#[error("invalid token")]
pub struct InvalidToken;

/// Issues and verifies signed identity tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // The payload carries no exp claim; leaving the default validation
        // in place would reject every token.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Produce a signed token binding the given user id.
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user_id.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// Verify a token and return the user id it binds.
    pub fn verify(&self, token: &str) -> Result<Uuid, InvalidToken> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| InvalidToken)?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_verify_yields_same_id() {
        let tokens = TokenService::new("test-secret");
        let user_id = Uuid::new_v4();

        let token = tokens.issue(user_id).unwrap();
        assert!(!token.is_empty());
        assert_eq!(tokens.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn different_secret_fails_verification() {
        let issuer = TokenService::new("secret-one");
        let verifier = TokenService::new("secret-two");

        let token = issuer.issue(Uuid::new_v4()).unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn tampered_token_fails_verification() {
        let tokens = TokenService::new("test-secret");
        let token = tokens.issue(Uuid::new_v4()).unwrap();

        // Flip a character in the payload segment.
        let mut tampered = token.into_bytes();
        let mid = tampered.len() / 2;
        tampered[mid] = if tampered[mid] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(tampered).unwrap();

        assert!(tokens.verify(&tampered).is_err());
    }

    #[test]
    fn garbage_input_fails_verification() {
        let tokens = TokenService::new("test-secret");
        assert!(tokens.verify("").is_err());
        assert!(tokens.verify("not.a.jwt").is_err());
        assert!(tokens.verify("invalid").is_err());
    }

    #[test]
    fn tokens_have_no_expiry() {
        // The claims carry only the subject; verification must not demand
        // an exp claim.
        let tokens = TokenService::new("test-secret");
        let token = tokens.issue(Uuid::new_v4()).unwrap();
        assert!(tokens.verify(&token).is_ok());
    }
}
