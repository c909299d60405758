//! # Identity Assertion
//!
//! The platform never manages credentials: an external authentication
//! collaborator (gateway, session proxy) asserts the caller's identity and
//! this layer consumes one assertion per call, as `X-User-Id` and
//! `X-User-Name` headers.

use crate::error::ApiError;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use std::future::{ready, Ready};

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_NAME_HEADER: &str = "x-user-name";

/// The authenticated caller: identifier plus display label.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
    pub display_name: String,
}

impl FromRequest for Identity {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

fn extract(req: &HttpRequest) -> Result<Identity, ApiError> {
    let user_id = match header(req, USER_ID_HEADER) {
        Some(id) if !id.trim().is_empty() => id,
        _ => return Err(ApiError::Unauthenticated("You must be logged in.")),
    };
    // Display label falls back to the identifier, like the original UI falls
    // back from displayName to the account email.
    let display_name = header(req, USER_NAME_HEADER).unwrap_or_else(|| user_id.clone());
    Ok(Identity { user_id, display_name })
}

fn header(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn missing_user_id_is_unauthenticated() {
        let req = TestRequest::default().to_http_request();
        assert!(matches!(extract(&req), Err(ApiError::Unauthenticated(_))));
    }

    #[test]
    fn display_name_falls_back_to_user_id() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, "u1"))
            .to_http_request();
        let identity = extract(&req).unwrap();
        assert_eq!(identity.user_id, "u1");
        assert_eq!(identity.display_name, "u1");
    }

    #[test]
    fn both_headers_are_honoured() {
        let req = TestRequest::default()
            .insert_header((USER_ID_HEADER, "u1"))
            .insert_header((USER_NAME_HEADER, "User One"))
            .to_http_request();
        let identity = extract(&req).unwrap();
        assert_eq!(identity.display_name, "User One");
    }
}
