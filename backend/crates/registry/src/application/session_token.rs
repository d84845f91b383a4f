//! Session Token
//!
//! The cookie carries `"{session_id}.{signature}"` where the signature is
//! HMAC-SHA256 over the session id string, base64url-encoded. The token
//! itself holds no state; it only proves that the session id was issued
//! by this process before the database is consulted.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Issue a signed token for a session id.
pub fn issue(session_id: Uuid, secret: &[u8; 32]) -> String {
    let session_id = session_id.to_string();

    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", session_id, URL_SAFE_NO_PAD.encode(signature))
}

/// Verify a token and extract the session id.
///
/// The HMAC check (constant-time) runs before the id is parsed, so
/// forged or tampered tokens never reach the session store.
pub fn verify(token: &str, secret: &[u8; 32]) -> Option<Uuid> {
    let (session_id_str, signature_b64) = token.split_once('.')?;

    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(session_id_str.as_bytes());

    let signature = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;
    mac.verify_slice(&signature).ok()?;

    session_id_str.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [7u8; 32];

    #[test]
    fn test_issue_verify_roundtrip() {
        let session_id = Uuid::new_v4();
        let token = issue(session_id, &SECRET);
        assert_eq!(verify(&token, &SECRET), Some(session_id));
    }

    #[test]
    fn test_tampered_session_id_rejected() {
        let token = issue(Uuid::new_v4(), &SECRET);
        let other_id = Uuid::new_v4().to_string();
        let signature = token.split_once('.').unwrap().1;
        let forged = format!("{}.{}", other_id, signature);
        assert_eq!(verify(&forged, &SECRET), None);
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let token = issue(Uuid::new_v4(), &SECRET);
        let session_id = token.split_once('.').unwrap().0;
        let forged = format!("{}.{}", session_id, "AAAA");
        assert_eq!(verify(&forged, &SECRET), None);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issue(Uuid::new_v4(), &SECRET);
        assert_eq!(verify(&token, &[8u8; 32]), None);
    }

    #[test]
    fn test_garbage_rejected() {
        assert_eq!(verify("", &SECRET), None);
        assert_eq!(verify("no-dot-here", &SECRET), None);
        assert_eq!(verify("a.b.c", &SECRET), None);
    }
}
