//! Configuration for the frontend application

/// Backend origin, read at compile time from `APPROVAL_DESK_API_BASE`.
/// - For local development: "http://localhost:8000"
pub const API_BASE: &str = match option_env!("APPROVAL_DESK_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Cookie holding the manager's access token, set by the login page.
pub const TOKEN_COOKIE: &str = approval_desk_shared::credential::ACCESS_TOKEN_COOKIE;
