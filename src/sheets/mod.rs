pub mod http;
pub mod loader;
pub mod source;

pub use http::HttpSheetSource;
pub use loader::{fetch, load_all};
pub use source::{FetchError, SheetSource};
