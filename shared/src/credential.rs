//! Session token lookup.

/// Name of the cookie that carries the manager's access token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Source of the bearer token sent with every backend call.
pub trait CredentialStore {
    /// Current token, `None` when the user is not signed in.
    fn token(&self) -> Option<String>;
}

/// A fixed token, useful for mock builds and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCredential(pub Option<String>);

impl CredentialStore for StaticCredential {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Looks `name` up in a `document.cookie` style string.
///
/// Entries are `;`-separated; the first one starting with `name=` wins and its
/// value is percent-decoded. A value that does not decode to UTF-8 is
/// returned undecoded.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    let prefix = format!("{name}=");
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|entry| entry.strip_prefix(prefix.as_str()))
        .map(|raw| match urlencoding::decode(raw) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => raw.to_string(),
        })
}

/// `Authorization` header value. A missing token is sent empty so the backend
/// answers 401 instead of the request silently going out unauthenticated.
pub fn bearer_header(token: Option<&str>) -> String {
    format!("Bearer {}", token.unwrap_or_default())
}
