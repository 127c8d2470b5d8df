//! Route registration errors

/// Result type for route registration
pub type RouteResult<T> = Result<T, RouteError>;

/// Errors surfaced while building a route table
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A scanned service type has no generic ancestor to take its request type from
    #[error("service type `{service}` has no generic base carrying a request type")]
    MissingRequestType { service: String },

    /// Positional placeholders do not line up with the supplied property selectors
    #[error(
        "route template `{template}` expects {expected} property selector(s), {supplied} supplied"
    )]
    FormatMismatch { template: String, expected: usize, supplied: usize },

    /// Unbalanced braces or a non-numeric placeholder
    #[error("malformed route template `{template}`: {reason}")]
    MalformedTemplate { template: String, reason: String },

    /// A property selector that is not a plain member access
    #[error(
        "unsupported property selector `{expression}`: expected a member access such as `|x| x.id`"
    )]
    UnsupportedExpression { expression: String },

    /// A property selector that does not parse as a closure
    #[error("invalid property selector `{expression}`: {reason}")]
    InvalidSelector { expression: String, reason: String },

    /// A selector named a field the request type does not declare
    #[error("request type `{request_type}` has no property `{property}`")]
    UnknownProperty { request_type: String, property: String },

    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}
