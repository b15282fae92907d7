//! SearXNG tools module.
//!
//! - `format`: output format negotiation
//! - `params`: tool arguments and input schema
//! - `request`: arguments → request URL
//! - `response`: response body → tool output, error body → failure detail
//! - `search`: the `search` tool itself

pub mod format;
pub mod params;
pub mod request;
pub mod response;
pub mod search;

pub use format::OutputFormat;
pub use params::{SafeSearch, SearchParams, TimeRange};
pub use search::SearchTool;
