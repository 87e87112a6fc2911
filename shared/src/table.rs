//! Table model of the request list.
//!
//! Rows are plain typed values. The view layer turns every cell into a text
//! node, so server-provided text is never interpreted as markup.

use crate::{
    modal::DetailSeed,
    request::{request_type_label, UserRequest},
};

/// Column headers, in display order. The last column holds the view action.
pub const COLUMNS: [&str; 10] = [
    "ID",
    "Bill code",
    "Type",
    "Content",
    "Status",
    "Approver",
    "Reason",
    "Created at",
    "Approved at",
    "",
];

/// Replaces the date/time separator `T` with a space. Only the first `T` is
/// touched and no timezone conversion happens.
pub fn format_timestamp(raw: &str) -> String {
    raw.replacen('T', " ", 1)
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRow {
    /// Identifier, also the key of the row.
    pub request_id: i64,
    /// Bill code cell.
    pub bill_code: String,
    /// Raw request type.
    pub request_type: String,
    /// Human label of the type.
    pub type_label: String,
    /// Content cell.
    pub content: String,
    /// Status cell.
    pub status: String,
    /// Approver cell.
    pub approver: String,
    /// Reason cell.
    pub reason: String,
    /// Creation time, separator replaced.
    pub create_at: String,
    /// Decision time, separator replaced; empty until decided.
    pub approved_at: String,
}

impl RequestRow {
    /// Builds the row for one request.
    pub fn from_request(request: &UserRequest) -> Self {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let request_type = text(&request.request_type);
        Self {
            request_id: request.request_id,
            bill_code: text(&request.bill_code),
            type_label: request_type_label(&request_type).to_string(),
            request_type,
            content: text(&request.content),
            status: request.status.clone(),
            approver: text(&request.approver),
            reason: text(&request.reason),
            create_at: request.create_at.as_deref().map(format_timestamp).unwrap_or_default(),
            approved_at: request.approved_at.as_deref().map(format_timestamp).unwrap_or_default(),
        }
    }

    /// Cell texts for every data column, in [`COLUMNS`] order.
    pub fn cells(&self) -> [String; 9] {
        [
            self.request_id.to_string(),
            self.bill_code.clone(),
            self.type_label.clone(),
            self.content.clone(),
            self.status.clone(),
            self.approver.clone(),
            self.reason.clone(),
            self.create_at.clone(),
            self.approved_at.clone(),
        ]
    }

    /// Values handed to the detail modal by the row's view action.
    pub fn detail_seed(&self) -> DetailSeed {
        DetailSeed {
            request_id: self.request_id,
            bill_code: self.bill_code.clone(),
            request_type: self.request_type.clone(),
            content: self.content.clone(),
            status: self.status.clone(),
        }
    }
}

/// Current contents of the table body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTable {
    rows: Vec<RequestRow>,
    /// Bumped on every replacement so views can tell two identical result
    /// sets apart.
    generation: u64,
}

impl RequestTable {
    /// Rows built from one fetch, in server order.
    pub fn build_rows(requests: &[UserRequest]) -> Vec<RequestRow> {
        requests.iter().map(RequestRow::from_request).collect()
    }

    /// Replaces every row. There is no partial update.
    pub fn replace(&mut self, rows: Vec<RequestRow>) {
        self.rows = rows;
        self.generation += 1;
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[RequestRow] {
        &self.rows
    }

    /// Number of completed replacements.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Finds a row by request id.
    pub fn row(&self, request_id: i64) -> Option<&RequestRow> {
        self.rows.iter().find(|row| row.request_id == request_id)
    }
}
