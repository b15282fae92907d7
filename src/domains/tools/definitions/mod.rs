//! Tool definitions module.
//!
//! This module exports all available tool definitions.

pub mod searxng;

pub use searxng::{SearchParams, SearchTool};
