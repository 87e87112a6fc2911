//! Detail/action panel for a single request.

use crate::request::{is_actionable_status, request_type_label};

/// Values a row hands to the modal when its view action is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSeed {
    /// Request shown.
    pub request_id: i64,
    /// Bill code, also used in notifications.
    pub bill_code: String,
    /// Raw request type.
    pub request_type: String,
    /// Request content.
    pub content: String,
    /// Status at the time the table was fetched.
    pub status: String,
}

/// State of the detail modal.
///
/// Accept and reject are enabled only while the shown request is in the
/// `CREATE` status. The status change itself happens on the server and is
/// only observed here through a table refresh.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailModal {
    visible: bool,
    seed: Option<DetailSeed>,
    reason: String,
    actions_enabled: bool,
}

impl DetailModal {
    /// Fills the fields from `seed`, clears the reason and shows the modal.
    pub fn open(&mut self, seed: DetailSeed) {
        self.actions_enabled = is_actionable_status(&seed.status);
        self.seed = Some(seed);
        self.reason.clear();
        self.visible = true;
    }

    /// Hides the modal. Field values stay until the next [`DetailModal::open`].
    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Replaces the reason text.
    pub fn set_reason(&mut self, reason: String) {
        self.reason = reason;
    }

    /// Whether the modal is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether accept and reject can be pressed.
    pub fn actions_enabled(&self) -> bool {
        self.actions_enabled
    }

    /// Current reason text.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The request shown, if the modal was ever opened.
    pub fn seed(&self) -> Option<&DetailSeed> {
        self.seed.as_ref()
    }

    /// Request id shown, if any.
    pub fn request_id(&self) -> Option<i64> {
        self.seed.as_ref().map(|seed| seed.request_id)
    }

    /// Label of the shown request's type.
    pub fn type_label(&self) -> &str {
        self.seed
            .as_ref()
            .map(|seed| request_type_label(&seed.request_type))
            .unwrap_or_default()
    }
}
