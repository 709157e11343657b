//! Session Token Signing
//!
//! The cookie value is `<session_id>.<base64url(HMAC-SHA256(session_id))>`.
//! The id alone identifies the session row; the signature stops a client
//! from minting tokens for arbitrary session ids.

use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::domain::value_object::session_id::SessionId;
use crate::error::{ForumError, ForumResult};

/// Generate a signed session token
pub fn generate(session_id: &SessionId, secret: &[u8; 32]) -> String {
    let session_id = session_id.to_string();

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!(
        "{}.{}",
        session_id,
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Parse and verify a session token
pub fn parse(token: &str, secret: &[u8; 32]) -> ForumResult<SessionId> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 2 {
        return Err(ForumError::SessionInvalid);
    }

    let session_id_str = parts[0];
    let signature_b64 = parts[1];

    // Verify signature
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id_str.as_bytes());

    let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| ForumError::SessionInvalid)?;

    mac.verify_slice(&signature)
        .map_err(|_| ForumError::SessionInvalid)?;

    // Parse UUID
    let uuid: uuid::Uuid = session_id_str
        .parse()
        .map_err(|_| ForumError::SessionInvalid)?;

    Ok(SessionId::from_uuid(uuid))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn test_roundtrip() {
        let session_id = SessionId::new();
        let token = generate(&session_id, &SECRET);
        let parsed = parse(&token, &SECRET).unwrap();
        assert_eq!(parsed, session_id);
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let session_id = SessionId::new();
        let token = generate(&session_id, &SECRET);
        let other_secret = [8u8; 32];
        assert!(parse(&token, &other_secret).is_err());
    }

    #[test]
    fn test_rejects_tampered_id() {
        let session_id = SessionId::new();
        let token = generate(&session_id, &SECRET);
        let other_id = SessionId::new();
        let sig = token.split('.').nth(1).unwrap();
        let forged = format!("{}.{}", other_id, sig);
        assert!(parse(&forged, &SECRET).is_err());
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        assert!(parse("", &SECRET).is_err());
        assert!(parse("no-dot", &SECRET).is_err());
        assert!(parse("a.b.c", &SECRET).is_err());
        assert!(parse("not-a-uuid.!!!!", &SECRET).is_err());
    }
}
