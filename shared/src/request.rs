//! Request records as returned by the manager listing endpoint.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Status of a request that has not been accepted or rejected yet.
pub const STATUS_CREATE: &str = "CREATE";

/// A unit of work awaiting manager approval.
///
/// The record is owned by the server; this crate only displays it and asks
/// for status transitions. Nullable columns come back as `null` and are kept
/// as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRequest {
    /// Server-assigned identifier.
    pub request_id: i64,
    /// Business bill code the request refers to.
    #[serde(default)]
    pub bill_code: Option<String>,
    /// Request kind, e.g. `REMOVE_BILL` or `CHANGE_COD`.
    #[serde(default, rename = "type")]
    pub request_type: Option<String>,
    /// Free-text description written by the requester.
    #[serde(default)]
    pub content: Option<String>,
    /// Current status (`CREATE`, `ACCEPTED`, `REJECTED`, ...). The column is
    /// nullable; a missing status reads as empty and is never actionable.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    /// Manager who decided the request. The backend may send a user id.
    #[serde(default, alias = "user_id_approved", deserialize_with = "text_or_number")]
    pub approver: Option<String>,
    /// Reason recorded with the decision.
    #[serde(default)]
    pub reason: Option<String>,
    /// Creation timestamp, `YYYY-MM-DDTHH:MM:SS`.
    #[serde(default)]
    pub create_at: Option<String>,
    /// Decision timestamp, absent until the request is decided.
    #[serde(default)]
    pub approved_at: Option<String>,
}

impl UserRequest {
    /// Whether the request is still waiting for a decision.
    pub fn is_actionable(&self) -> bool {
        is_actionable_status(&self.status)
    }
}

/// `true` only for the initial `CREATE` status. Matching is exact.
pub fn is_actionable_status(status: &str) -> bool {
    status == STATUS_CREATE
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// Status selector of the search bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Every status; the query parameter is omitted.
    All,
    /// Requests still waiting for a decision.
    #[default]
    Create,
    /// Accepted requests.
    Accepted,
    /// Rejected requests.
    Rejected,
}

impl StatusFilter {
    /// All selectable values, in the order the select lists them.
    pub const ALL: [StatusFilter; 4] =
        [StatusFilter::All, StatusFilter::Create, StatusFilter::Accepted, StatusFilter::Rejected];

    /// Value sent as `request_status`, `None` for [`StatusFilter::All`].
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Create => Some(STATUS_CREATE),
            StatusFilter::Accepted => Some("ACCEPTED"),
            StatusFilter::Rejected => Some("REJECTED"),
        }
    }

    /// Value used by the `<select>` element.
    pub fn as_str(self) -> &'static str {
        self.query_value().unwrap_or("ALL")
    }

    /// Parses a `<select>` value; unknown values fall back to [`StatusFilter::All`].
    pub fn from_select_value(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "CREATE" => StatusFilter::Create,
            "ACCEPTED" => StatusFilter::Accepted,
            "REJECTED" => StatusFilter::Rejected,
            _ => StatusFilter::All,
        }
    }

    /// Label shown in the select.
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Create => "Pending",
            StatusFilter::Accepted => "Accepted",
            StatusFilter::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human label of a request type; unknown types are returned as-is.
pub fn request_type_label(request_type: &str) -> &str {
    match request_type {
        "REMOVE_BILL" => "Remove bill",
        "CHANGE_COD" => "Change COD",
        other => other,
    }
}
