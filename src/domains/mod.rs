//! Domains module containing business logic organized by bounded contexts.
//!
//! The server only exposes tools; each subdomain here represents a specific
//! area of functionality.

pub mod tools;
