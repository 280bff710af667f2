//! JSON Web Token helpers for admin sessions.
use jsonwebtoken::{
    decode, encode, errors::Error as JwtError, Algorithm, DecodingKey, EncodingKey, Header,
    TokenData, Validation,
};
use serde::{de::DeserializeOwned, Serialize};

/// Sign `claims` with an HMAC secret (HS256 unless told otherwise).
#[inline]
pub fn encode_jwt<T: Serialize>(
    claims: &T,
    secret: &[u8],
    algorithm: Option<Algorithm>,
) -> Result<String, JwtError> {
    let header = Header::new(algorithm.unwrap_or(Algorithm::HS256));
    encode(&header, claims, &EncodingKey::from_secret(secret))
}

#[inline]
pub fn decode_jwt<T: DeserializeOwned>(
    token: &str,
    secret: &[u8],
    validation: Option<Validation>,
) -> Result<TokenData<T>, JwtError> {
    let validation = validation.unwrap_or_default();
    decode::<T>(token, &DecodingKey::from_secret(secret), &validation)
}

/// HS256 validation pinned to a single issuer, audience unchecked and zero leeway.
#[inline]
pub fn issuer_validation(issuer: &str) -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    validation.leeway = 0;
    validation.set_issuer(&[issuer]);
    validation
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize)]
    struct TestClaims {
        sub: String,
        iss: String,
        exp: i64,
    }

    fn claims(exp_offset: i64) -> TestClaims {
        TestClaims {
            sub: "1".into(),
            iss: "site-cms".into(),
            exp: chrono::Utc::now().timestamp() + exp_offset,
        }
    }

    #[test]
    fn round_trips_with_matching_secret() {
        let token = encode_jwt(&claims(60), b"secret", None).unwrap();
        let data =
            decode_jwt::<TestClaims>(&token, b"secret", Some(issuer_validation("site-cms")))
                .unwrap();
        assert_eq!(data.claims.sub, "1");
    }

    #[test]
    fn reports_signature_mismatch() {
        let token = encode_jwt(&claims(60), b"secret", None).unwrap();
        let err = decode_jwt::<TestClaims>(&token, b"other", Some(issuer_validation("site-cms")))
            .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidSignature);
    }

    #[test]
    fn reports_expiry() {
        let token = encode_jwt(&claims(-120), b"secret", None).unwrap();
        let err = decode_jwt::<TestClaims>(&token, b"secret", Some(issuer_validation("site-cms")))
            .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::ExpiredSignature);
    }

    #[test]
    fn reports_wrong_issuer() {
        let token = encode_jwt(&claims(60), b"secret", None).unwrap();
        let err = decode_jwt::<TestClaims>(&token, b"secret", Some(issuer_validation("elsewhere")))
            .unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidIssuer);
    }
}
