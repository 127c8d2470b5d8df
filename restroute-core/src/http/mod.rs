//! HTTP vocabulary shared by the route table
//!
//! - [`method`] - HTTP method names
//! - [`verbs`] - [`ApplyTo`] verb flags and the canonical verb string

pub mod method;
pub mod verbs;

pub use method::HttpMethod;
pub use verbs::ApplyTo;

/// HTTP wire constants
pub mod constants {
    /// Common content types, usable as a route's default content type
    pub mod content_types {
        pub const JSON: &str = "application/json";
        pub const HTML: &str = "text/html; charset=utf-8";
        pub const TEXT: &str = "text/plain; charset=utf-8";
        pub const XML: &str = "application/xml";
        pub const CSV: &str = "text/csv";
        pub const BINARY: &str = "application/octet-stream";
    }
}
