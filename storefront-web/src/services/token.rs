//! # Session Token Decoding
//!
//! Reads the claims out of a bearer token's payload segment. The signature
//! is not checked and expiry is ignored: the result is only used to derive
//! the requester id sent with an order, and the order service validates the
//! token itself.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use serde_json::{Map, Value};
use thiserror::Error;

/// Standard alphabet, padding optional, trailing bits tolerated.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("expected 3 dot-separated segments, found {found}")]
    MissingSegments { found: usize },

    #[error("payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload is not a JSON object")]
    NotAnObject,
}

/// Claims carried in a token payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims(Map<String, Value>);

impl Claims {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// The `sub` claim, when it is a non-empty string.
    pub fn subject(&self) -> Option<&str> {
        self.0
            .get("sub")
            .and_then(Value::as_str)
            .filter(|sub| !sub.is_empty())
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Decode the payload of `header.payload.signature`.
pub fn decode_claims(token: &str) -> Result<Claims, DecodeError> {
    let found = token.split('.').count();
    let payload = match token.split('.').nth(1) {
        Some(payload) if found >= 3 => payload,
        _ => return Err(DecodeError::MissingSegments { found }),
    };

    let standard: String = payload
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();

    let bytes = PAYLOAD_ENGINE.decode(standard.as_bytes())?;
    let text = String::from_utf8(bytes)?;

    match serde_json::from_str::<Value>(&text)? {
        Value::Object(map) => Ok(Claims(map)),
        _ => Err(DecodeError::NotAnObject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

    fn token_with_payload(payload: &[u8]) -> String {
        format!("eyJhbGciOiJIUzI1NiJ9.{}.c2lnbmF0dXJl", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn test_subject_is_read() {
        let claims = decode_claims(&token_with_payload(br#"{"sub":"alice"}"#)).unwrap();
        assert_eq!(claims.subject(), Some("alice"));
        assert_eq!(claims.get("sub"), Some(&Value::String("alice".to_string())));
    }

    #[test]
    fn test_fewer_than_three_segments_fail() {
        let payload = URL_SAFE_NO_PAD.encode(br#"{"sub":"alice"}"#);
        for token in ["".to_string(), "abc".to_string(), format!("header.{}", payload)] {
            match decode_claims(&token) {
                Err(DecodeError::MissingSegments { found }) => assert!(found < 3),
                other => panic!("unexpected result for {:?}: {:?}", token, other),
            }
        }
    }

    #[test]
    fn test_url_safe_alphabet_is_mapped() {
        let payload = br#"{"sub":"????????"}"#;
        let encoded = URL_SAFE_NO_PAD.encode(payload);
        assert!(encoded.contains('_'));
        let claims = decode_claims(&format!("h.{}.s", encoded)).unwrap();
        assert_eq!(claims.subject(), Some("????????"));
    }

    #[test]
    fn test_padded_payload_is_accepted() {
        let encoded = URL_SAFE.encode(br#"{"sub":"bob"}"#);
        assert!(encoded.ends_with('='));
        let claims = decode_claims(&format!("h.{}.s", encoded)).unwrap();
        assert_eq!(claims.subject(), Some("bob"));
    }

    #[test]
    fn test_multibyte_subject() {
        let claims = decode_claims(&token_with_payload(r#"{"sub":"zoë","roles":["user"]}"#.as_bytes())).unwrap();
        assert_eq!(claims.subject(), Some("zoë"));
        assert_eq!(claims.get("roles"), Some(&serde_json::json!(["user"])));
    }

    #[test]
    fn test_bad_base64() {
        assert!(matches!(decode_claims("h.!!!!.s"), Err(DecodeError::Base64(_))));
    }

    #[test]
    fn test_invalid_utf8() {
        assert!(matches!(
            decode_claims(&token_with_payload(&[0xff, 0xfe, 0xfd])),
            Err(DecodeError::Utf8(_))
        ));
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            decode_claims(&token_with_payload(b"hello")),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn test_json_that_is_not_an_object() {
        assert!(matches!(
            decode_claims(&token_with_payload(b"[1,2]")),
            Err(DecodeError::NotAnObject)
        ));
    }

    #[test]
    fn test_missing_or_unusable_subject() {
        let payloads: [&[u8]; 3] = [br#"{"name":"alice"}"#, br#"{"sub":""}"#, br#"{"sub":42}"#];
        for payload in payloads {
            let claims = decode_claims(&token_with_payload(payload)).unwrap();
            assert_eq!(claims.subject(), None);
        }
    }
}
