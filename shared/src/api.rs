//! Backend contract of the manager request endpoints.
//!
//! [`RequestApi`] is the seam between the workflows in [`crate::desk`] and the
//! transport. The browser build implements it with `gloo-net`; tests script it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    date_range::{parse_date_range, DateKey},
    request::{StatusFilter, UserRequest},
};

/// Path of the listing endpoint.
pub const LIST_REQUESTS_PATH: &str = "/managers/list-all-request";
/// Path of the accept command.
pub const ACCEPT_REQUEST_PATH: &str = "/managers/accept-request";
/// Path of the reject command.
pub const REJECT_REQUEST_PATH: &str = "/managers/reject-request";

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never got a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The request body could not be encoded.
    #[error("Serialize error: {0}")]
    Serialize(String),
    /// The backend answered with an unexpected status.
    #[error("HTTP error: {status}{}", detail_suffix(.detail))]
    Status {
        /// HTTP status code.
        status: u16,
        /// `detail` field of the error body, when the backend sent one.
        detail: Option<String>,
    },
    /// The response body did not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Builds a [`ApiError::Status`] from a status code and the raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            detail: error_detail(body),
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(" ({d})")).unwrap_or_default()
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Extracts `detail` from an error body such as `{"detail": "Authentication Failed"}`.
pub fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail {
        serde_json::Value::String(text) => Some(text),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Query parameters of the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    /// Lower bound business date, inclusive.
    pub from_date: DateKey,
    /// Upper bound business date, inclusive.
    pub to_date: DateKey,
    /// Status filter; [`StatusFilter::All`] omits the parameter.
    pub status: StatusFilter,
}

impl ListQuery {
    /// Builds the query from the search bar's current values.
    pub fn from_filter(filter: &FilterCriteria) -> Self {
        let [from_date, to_date] = parse_date_range(&filter.date_range);
        Self {
            from_date,
            to_date,
            status: filter.status,
        }
    }

    /// URL-encoded query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut params = vec![
            format!("from_date={}", self.from_date),
            format!("to_date={}", self.to_date),
        ];
        if let Some(status) = self.status.query_value() {
            params.push(format!("request_status={}", urlencoding::encode(status)));
        }
        params.join("&")
    }

    /// Full listing URL under `base`.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}?{}", base.trim_end_matches('/'), LIST_REQUESTS_PATH, self.to_query_string())
    }
}

/// Values of the search bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Range text in `MM/DD/YYYY - MM/DD/YYYY` form.
    pub date_range: String,
    /// Selected status.
    pub status: StatusFilter,
}

/// State-changing command on a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestAction {
    /// Approve the request.
    Accept,
    /// Refuse the request.
    Reject,
}

impl RequestAction {
    /// Endpoint path of the command.
    pub fn path(self) -> &'static str {
        match self {
            RequestAction::Accept => ACCEPT_REQUEST_PATH,
            RequestAction::Reject => REJECT_REQUEST_PATH,
        }
    }

    /// Full command URL under `base`.
    pub fn url(self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    /// Past-tense verb used in notifications.
    pub fn past_tense(self) -> &'static str {
        match self {
            RequestAction::Accept => "Accepted",
            RequestAction::Reject => "Rejected",
        }
    }
}

/// JSON body of the accept and reject commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionBody {
    /// Target request.
    pub request_id: i64,
    /// Free-text reason; may be empty.
    pub reason: String,
}

/// Manager request endpoints.
#[async_trait(?Send)]
pub trait RequestApi {
    /// Lists requests matching `query`, in server order.
    async fn list_requests(&self, query: &ListQuery) -> Result<Vec<UserRequest>, ApiError>;

    /// Sends an accept or reject command. Succeeds only on HTTP 200.
    async fn send_action(&self, action: RequestAction, body: &ActionBody) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_url_carries_keys_and_status() {
        let query = ListQuery::from_filter(&FilterCriteria {
            date_range: "01/02/2024 - 03/04/2024".to_string(),
            status: StatusFilter::Create,
        });
        assert_eq!(
            query.url("http://localhost:8000/"),
            "http://localhost:8000/managers/list-all-request?from_date=20240102&to_date=20240304&request_status=CREATE"
        );
    }

    #[test]
    fn all_statuses_omit_parameter_and_bad_dates_send_nan() {
        let query = ListQuery::from_filter(&FilterCriteria {
            date_range: "not a range".to_string(),
            status: StatusFilter::All,
        });
        assert_eq!(query.to_query_string(), "from_date=NaN&to_date=NaN");
    }

    #[test]
    fn action_urls_and_body() -> anyhow::Result<()> {
        assert_eq!(
            RequestAction::Reject.url("http://api"),
            "http://api/managers/reject-request"
        );
        let body = serde_json::to_value(ActionBody {
            request_id: 4,
            reason: String::new(),
        })?;
        assert_eq!(body, serde_json::json!({ "request_id": 4, "reason": "" }));
        Ok(())
    }

    #[test]
    fn status_error_keeps_backend_detail() {
        let err = ApiError::from_status(403, r#"{"detail":"Authorization Failed, Only for MANAGER role"}"#);
        assert_eq!(
            err.to_string(),
            "HTTP error: 403 (Authorization Failed, Only for MANAGER role)"
        );
        assert_eq!(ApiError::from_status(502, "<html>").to_string(), "HTTP error: 502");
    }
}
