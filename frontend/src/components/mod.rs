// Reusable components live here.

pub mod detail_modal;
pub mod request_table;
pub mod search_bar;
pub mod toast;
