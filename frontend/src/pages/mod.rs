pub mod not_found;
pub mod requests;

pub use requests::RequestsPage;
