//! Bearer token authentication for the `/icp/*` routes

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

static API_KEY: std::sync::OnceLock<String> = std::sync::OnceLock::new();

pub fn init_api_key(key: String) {
    let _ = API_KEY.set(key);
}

fn get_api_key() -> Option<&'static str> {
    API_KEY.get().map(|s| s.as_str())
}

/// Compare an `Authorization` header value against the configured key
fn check_bearer(header: Option<&str>, api_key: &str) -> Result<(), &'static str> {
    match header {
        Some(value) => match value.strip_prefix("Bearer ") {
            Some(token) if token == api_key => Ok(()),
            Some(_) => Err("Invalid API key attempted"),
            None => Err("Invalid Authorization header format"),
        },
        None => Err("Missing Authorization header"),
    }
}

pub async fn auth_middleware(request: Request, next: Next) -> Result<Response, StatusCode> {
    let api_key = match get_api_key() {
        Some(key) if !key.is_empty() => key,
        // Auth disabled
        _ => return Ok(next.run(request).await),
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match check_bearer(auth_header, api_key) {
        Ok(()) => Ok(next.run(request).await),
        Err(reason) => {
            tracing::warn!("{}", reason);
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bearer() {
        assert!(check_bearer(Some("Bearer k1"), "k1").is_ok());
        assert_eq!(
            check_bearer(Some("Bearer nope"), "k1"),
            Err("Invalid API key attempted")
        );
        assert_eq!(
            check_bearer(Some("Basic k1"), "k1"),
            Err("Invalid Authorization header format")
        );
        assert_eq!(check_bearer(None, "k1"), Err("Missing Authorization header"));
    }
}
