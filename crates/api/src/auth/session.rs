//! Session cookie handling.
//!
//! The session token travels in an HttpOnly cookie named [`SESSION_COOKIE_NAME`].
//! Non-browser clients may send the same token as `Authorization: Bearer`.

use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::HeaderMap;
use cookie::time::Duration;
use cookie::{Cookie, SameSite};

/// Name of the session cookie.
pub const SESSION_COOKIE_NAME: &str = "token";

/// Build the `Set-Cookie` value issued on login.
pub fn session_cookie(token: String, expiry_days: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE_NAME, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(secure)
        .max_age(Duration::days(expiry_days))
        .build()
}

/// Build the cookie that clears the session on logout.
pub fn removal_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(secure)
        .build();
    cookie.make_removal();
    cookie
}

/// Find the session token in a request.
///
/// The cookie wins over the `Authorization` header when both are present.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    token_from_cookies(headers).or_else(|| token_from_bearer(headers))
}

fn token_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse)
        .filter_map(Result::ok)
        .find(|c| c.name() == SESSION_COOKIE_NAME && !c.value().is_empty())
        .map(|c| c.value().to_string())
}

fn token_from_bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn session_cookie_attributes() {
        let rendered = session_cookie("abc.def.ghi".into(), 7, false).to_string();
        assert!(rendered.starts_with("token=abc.def.ghi"));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("SameSite=Lax"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("Max-Age=604800"));
        assert!(!rendered.contains("Secure"));
    }

    #[test]
    fn secure_flag_is_applied() {
        let rendered = session_cookie("t".into(), 1, true).to_string();
        assert!(rendered.contains("Secure"));
    }

    #[test]
    fn removal_cookie_expires_immediately() {
        let rendered = removal_cookie(false).to_string();
        assert!(rendered.starts_with("token=;"));
        assert!(rendered.contains("Max-Age=0"));
        assert!(rendered.contains("Path=/"));
    }

    #[test]
    fn token_from_cookie() {
        let h = headers(&[("cookie", "theme=dark; token=from-cookie")]);
        assert_eq!(extract_token(&h).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn token_from_bearer_header() {
        let h = headers(&[("authorization", "Bearer from-header")]);
        assert_eq!(extract_token(&h).as_deref(), Some("from-header"));
    }

    #[test]
    fn cookie_takes_precedence_over_bearer() {
        let h = headers(&[
            ("authorization", "Bearer from-header"),
            ("cookie", "token=from-cookie"),
        ]);
        assert_eq!(extract_token(&h).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn empty_cookie_falls_back_to_bearer() {
        let h = headers(&[
            ("cookie", "token="),
            ("authorization", "Bearer from-header"),
        ]);
        assert_eq!(extract_token(&h).as_deref(), Some("from-header"));
    }

    #[test]
    fn missing_or_malformed_credentials() {
        assert_eq!(extract_token(&HeaderMap::new()), None);
        let h = headers(&[("authorization", "Basic YWRtaW46YWRtaW4=")]);
        assert_eq!(extract_token(&h), None);
        let h = headers(&[("authorization", "Bearer ")]);
        assert_eq!(extract_token(&h), None);
    }
}
