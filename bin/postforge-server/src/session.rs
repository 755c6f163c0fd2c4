//! Signed session cookies.
//!
//! Sessions exist only to scope the rolling generation history.  The cookie
//! value is `<uuid>.<sig>` where `sig = hex(sha256(secret || ":" || uuid))`;
//! a missing or tampered cookie is treated as no session at all, and a fresh
//! one is minted on the next successful generation.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use sha2::{Digest, Sha256};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "postforge_session";

fn sign(secret: &str, id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(b":");
    hasher.update(id.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Mint a new session ID.
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// The full `Set-Cookie` value for a session ID.
pub fn set_cookie_value(secret: &str, id: &str) -> String {
    format!(
        "{SESSION_COOKIE}={id}.{sig}; Path=/; HttpOnly; SameSite=Lax",
        sig = sign(secret, id)
    )
}

/// Extract and verify the session ID from request headers.  Returns `None`
/// for absent, malformed or tampered cookies.
pub fn session_id_from_headers(secret: &str, headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;
    let value = cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then_some(value)
    })?;
    let (id, sig) = value.rsplit_once('.')?;
    if sign(secret, id) == sig {
        Some(id.to_owned())
    } else {
        None
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn round_trip_verifies() {
        let id = new_session_id();
        let cookie = set_cookie_value("secret", &id);
        let mut headers = HeaderMap::new();
        let header = cookie.split(';').next().unwrap().to_owned();
        headers.insert(COOKIE, HeaderValue::from_str(&header).unwrap());
        assert_eq!(session_id_from_headers("secret", &headers), Some(id));
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let id = new_session_id();
        let mut headers = HeaderMap::new();
        let forged = format!("{SESSION_COOKIE}={id}.deadbeef");
        headers.insert(COOKIE, HeaderValue::from_str(&forged).unwrap());
        assert_eq!(session_id_from_headers("secret", &headers), None);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let id = new_session_id();
        let cookie = set_cookie_value("secret-a", &id);
        let mut headers = HeaderMap::new();
        let header = cookie.split(';').next().unwrap().to_owned();
        headers.insert(COOKIE, HeaderValue::from_str(&header).unwrap());
        assert_eq!(session_id_from_headers("secret-b", &headers), None);
    }

    #[test]
    fn absent_cookie_is_none() {
        assert_eq!(session_id_from_headers("secret", &HeaderMap::new()), None);
    }
}
