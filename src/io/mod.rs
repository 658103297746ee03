pub mod export;
pub mod http_client;

pub use export::export_json;
pub use http_client::{fetch_page, FetchedPage};
