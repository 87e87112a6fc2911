//! Target-independent core of the approval desk.
//!
//! The browser frontend renders [`desk::DeskState`] and forwards user input to
//! [`desk::RequestDesk`]; everything in this crate also runs on the host so
//! the workflows can be tested without a browser.

pub mod api;
pub mod credential;
pub mod date_range;
pub mod desk;
pub mod modal;
pub mod notification;
pub mod request;
pub mod table;

pub use api::{ApiError, FilterCriteria, ListQuery, RequestAction, RequestApi};
pub use desk::{ActionOutcome, DeskEvent, DeskSink, DeskState, RefreshOutcome, RequestDesk};
pub use request::{StatusFilter, UserRequest};
