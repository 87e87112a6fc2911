use std::fmt::Display;

use approval_desk_shared::{
    credential::{cookie_value, CredentialStore},
    date_range::single_day_range,
};
use js_sys::Date;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::config::TOKEN_COOKIE;

/// Reads the access token from `document.cookie` on every call, so a token
/// refreshed by another tab is picked up.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCookies;

impl CredentialStore for DocumentCookies {
    fn token(&self) -> Option<String> {
        let document = web_sys::window()?.document()?;
        let document: HtmlDocument = document.dyn_into().ok()?;
        let cookies = document.cookie().ok()?;
        cookie_value(&cookies, TOKEN_COOKIE)
    }
}

/// Today's single-day range, the initial value of the date filter.
pub fn today_range() -> String {
    let now = Date::new_0();
    single_day_range(now.get_full_year(), now.get_month() + 1, now.get_date())
}

pub fn log_error(context: &str, err: &impl Display) {
    web_sys::console::error_1(&format!("{}: {}", context, err).into());
}
