//! Route registration
//!
//! # Data Flow
//! ```text
//! ServiceModule[]                 Selector<T>[] + "api/{0}/{1}"
//!     → extensions.rs (scan)          → template.rs (format)
//!         \                             /
//!          → ServiceRoutes::add(request type, path, verbs, content type)
//!              → RouteTable (RestPath entries, consumed by the router)
//! ```
//!
//! # Design Decisions
//! - The registry is a trait so framework route collections can be populated directly
//! - Verbs travel as the canonical space-separated string
//! - Errors are raised before the registry is touched; a failed call adds nothing
//! - Registration happens once at start-up, nothing is mutated afterwards

pub mod extensions;
pub mod template;

pub use extensions::{InferenceOptions, ServiceRoutesExt};
pub use template::Selector;

use std::fmt;

use crate::http::HttpMethod;
use crate::service::RequestDto;

/// Identifier of the request type a route is bound to
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestType(String);

impl RequestType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn of<T: RequestDto>() -> Self {
        T::request_type()
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registry that accepts route entries
///
/// Implemented by [`RouteTable`]; a host framework can implement it for its
/// own route collection and reuse every helper in [`ServiceRoutesExt`].
pub trait ServiceRoutes {
    /// Register `rest_path` for `request_type`, accepting the space-separated `verbs`
    fn add(
        &mut self,
        request_type: RequestType,
        rest_path: &str,
        verbs: &str,
        default_content_type: Option<&str>,
    ) -> &mut Self;
}

/// A single registered route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestPath {
    request_type: RequestType,
    path: String,
    verbs: String,
    default_content_type: Option<String>,
}

impl RestPath {
    pub fn new(
        request_type: RequestType,
        path: impl Into<String>,
        verbs: impl Into<String>,
        default_content_type: Option<String>,
    ) -> Self {
        Self { request_type, path: path.into(), verbs: verbs.into(), default_content_type }
    }

    pub fn request_type(&self) -> &RequestType {
        &self.request_type
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw verb list as registered, e.g. `"GET POST"`
    pub fn verbs(&self) -> &str {
        &self.verbs
    }

    pub fn default_content_type(&self) -> Option<&str> {
        self.default_content_type.as_deref()
    }

    /// Parsed verb list; tokens that are not HTTP methods are dropped
    pub fn allowed_verbs(&self) -> Vec<HttpMethod> {
        self.verbs.split_whitespace().filter_map(|v| v.parse().ok()).collect()
    }

    /// An empty verb list accepts every method
    pub fn allows(&self, method: HttpMethod) -> bool {
        self.verbs.trim().is_empty() || self.allowed_verbs().contains(&method)
    }

    /// Names of `{placeholder}` segments in the path, in order
    pub fn variable_names(&self) -> Vec<&str> {
        self.path
            .split('{')
            .skip(1)
            .filter_map(|rest| rest.split_once('}').map(|(name, _)| name))
            .filter(|name| !name.is_empty())
            .collect()
    }
}

impl fmt::Display for RestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verbs = if self.verbs.is_empty() { "ANY" } else { &self.verbs };
        write!(f, "{} {} -> {}", verbs, self.path, self.request_type)
    }
}

/// In-memory route table
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    paths: Vec<RestPath>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered routes in insertion order
    pub fn rest_paths(&self) -> &[RestPath] {
        &self.paths
    }

    pub fn paths_for<'a>(
        &'a self,
        request_type: &'a RequestType,
    ) -> impl Iterator<Item = &'a RestPath> + 'a {
        self.paths.iter().filter(move |p| p.request_type() == request_type)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl ServiceRoutes for RouteTable {
    fn add(
        &mut self,
        request_type: RequestType,
        rest_path: &str,
        verbs: &str,
        default_content_type: Option<&str>,
    ) -> &mut Self {
        for verb in verbs.split_whitespace() {
            if verb.parse::<HttpMethod>().is_err() {
                log::warn!("Route {} for {} lists unknown verb {}", rest_path, request_type, verb);
            }
        }

        let entry = RestPath::new(
            request_type,
            rest_path,
            verbs,
            default_content_type.map(str::to_string),
        );

        if self.paths.contains(&entry) {
            log::warn!("Duplicate route registered: {}", entry);
        }
        log::debug!("Registered route {}", entry);

        self.paths.push(entry);
        self
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RestPath;
    type IntoIter = std::slice::Iter<'a, RestPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}
