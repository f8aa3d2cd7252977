pub mod documents;
pub mod requests;
pub mod responses;

pub use documents::Document;
